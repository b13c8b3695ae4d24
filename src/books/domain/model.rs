use crate::books::domain::Book;
use crate::books::dto::VolumeDto;
use crate::core::library::LibraryError;

// BookEntity is a validated volume of the catalog search, holding only the fields the
// report needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntity {
    pub id: String,
    pub epub_available: bool,
    pub title: String,
    pub subtitle: Option<String>,
    pub language: Option<String>,
    pub page_count: Option<u32>,
}

impl BookEntity {
    pub fn new(id: &str, title: &str, epub_available: bool) -> Self {
        Self {
            id: id.to_string(),
            epub_available,
            title: title.to_string(),
            subtitle: None,
            language: Some("en".to_string()),
            page_count: None,
        }
    }
}

impl Book for BookEntity {
    fn is_epub_available(&self) -> bool {
        self.epub_available
    }

    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    fn page_count(&self) -> Option<u32> {
        self.page_count
    }
}

impl TryFrom<VolumeDto> for BookEntity {
    type Error = LibraryError;

    fn try_from(other: VolumeDto) -> Result<Self, Self::Error> {
        let record_id = other.id.clone();
        let missing = |field: &str| LibraryError::malformed_record(
            format!("volume is missing {}", field).as_str(), record_id.clone());

        let epub_available = other.access_info
            .ok_or_else(|| missing("accessInfo"))?
            .epub
            .and_then(|epub| epub.is_available)
            .ok_or_else(|| missing("accessInfo.epub.isAvailable"))?;
        let volume_info = other.volume_info.ok_or_else(|| missing("volumeInfo"))?;
        let title = volume_info.title.ok_or_else(|| missing("volumeInfo.title"))?;

        Ok(Self {
            // id is not part of the report, a volume without one is kept
            id: other.id.unwrap_or_default(),
            epub_available,
            title,
            subtitle: volume_info.subtitle,
            language: volume_info.language,
            page_count: volume_info.page_count,
        })
    }
}
