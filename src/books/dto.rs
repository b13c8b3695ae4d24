use serde::{Deserialize, Serialize};

// VolumesPageDto is one response page of the volumes search. The API omits `items`
// altogether once the offset runs past the last match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VolumesPageDto {
    #[serde(default)]
    pub items: Option<Vec<VolumeDto>>,
}

impl VolumesPageDto {
    pub fn into_items(self) -> Vec<VolumeDto> {
        self.items.unwrap_or_default()
    }
}

// VolumeDto mirrors the projected fields of a volume exactly as received; required
// fields are checked when converting into BookEntity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDto {
    pub id: Option<String>,
    pub access_info: Option<AccessInfoDto>,
    pub volume_info: Option<VolumeInfoDto>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccessInfoDto {
    pub epub: Option<EpubDto>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpubDto {
    pub is_available: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfoDto {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub language: Option<String>,
    pub page_count: Option<u32>,
}

impl VolumeDto {
    pub fn new(id: &str, title: &str, epub_available: bool) -> VolumeDto {
        VolumeDto {
            id: Some(id.to_string()),
            access_info: Some(AccessInfoDto {
                epub: Some(EpubDto { is_available: Some(epub_available) }),
            }),
            volume_info: Some(VolumeInfoDto {
                title: Some(title.to_string()),
                subtitle: None,
                language: Some("en".to_string()),
                page_count: None,
            }),
        }
    }
}
