use std::cmp::Reverse;
use crate::books::domain::Book;
use crate::utils::format::group_thousands;

pub const REPORT_WIDTH: usize = 80;
pub const TITLE_WIDTH: usize = 65;

pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Renders the available ebooks as a fixed-width plain-text table.
///
/// Books are ordered by page count, largest first (a missing count sorts as 0), with
/// ties kept in input order. Books without an epub are skipped after sorting, so ranks
/// run 1, 2, 3... over the rows actually shown.
pub fn render<B: Book>(author: &str, language: &str, books: &[B]) -> String {
    let mut sorted: Vec<&B> = books.iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|book| Reverse(book.page_count().unwrap_or(0)));

    let mut report = header(author, language);
    let available = sorted.into_iter().filter(|book| book.is_epub_available());
    for (rank, book) in available.enumerate() {
        let pages = book.page_count().map(group_thousands).unwrap_or_default();
        report.push_str(row(&(rank + 1).to_string(), &pages, &book.display_title()).as_str());
    }
    report
}

fn header(author: &str, language: &str) -> String {
    let separator = "=".repeat(REPORT_WIDTH);
    let heading = format!("\"{}\" ebooks (lang={})", author, language);
    format!("{sep}\n{heading:^width$}\n{sep}\n{columns}",
            sep = separator, heading = heading, width = REPORT_WIDTH,
            columns = row("#", "Pages", "Title"))
}

// precision on a str truncates by characters, not bytes
fn row(rank: &str, pages: &str, title: &str) -> String {
    format!("{:>4} | {:>5} | {:.width$}\n", rank, pages, title, width = TITLE_WIDTH)
}
