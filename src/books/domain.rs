pub mod model;

pub trait Book {
    fn is_epub_available(&self) -> bool;
    fn title(&self) -> &str;
    fn subtitle(&self) -> Option<&str>;
    fn page_count(&self) -> Option<u32>;

    // title and subtitle joined the way the report shows them
    fn display_title(&self) -> String {
        match self.subtitle() {
            Some(subtitle) => format!("{} / {}", self.title(), subtitle),
            None => self.title().to_string(),
        }
    }
}
