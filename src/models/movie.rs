use serde::{Deserialize, Serialize};

/// A movie as returned by the list endpoint.
///
/// Every field is required; a record missing one fails the whole response
/// with a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: u64,
    pub title: String,
    /// URL of the cover image (YTS: `medium_cover_image`)
    #[serde(rename = "medium_cover_image", alias = "coverImg", alias = "cover_image")]
    pub cover_image: String,
    pub summary: String,
    /// Category tags; order carries no meaning
    pub genres: Vec<String>,
}

impl Item {
    /// Genres joined for display, e.g. `Drama · Crime`.
    pub fn genre_line(&self) -> String {
        self.genres.join(" · ")
    }
}

/// Full record from the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub rating: Option<f32>,
    /// Minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, rename = "description_full", alias = "description", alias = "summary")]
    pub description: String,
    #[serde(
        default,
        rename = "large_cover_image",
        alias = "medium_cover_image",
        alias = "coverImg"
    )]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl DetailItem {
    /// `2h 22m` style runtime, `None` when unknown or zero.
    pub fn runtime_label(&self) -> Option<String> {
        match self.runtime {
            Some(0) | None => None,
            Some(minutes) if minutes < 60 => Some(format!("{}m", minutes)),
            Some(minutes) => Some(format!("{}h {:02}m", minutes / 60, minutes % 60)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_yts_record() {
        let json = r#"{
            "id": 10,
            "url": "https://yts.mx/movies/heat-1995",
            "title": "Heat",
            "year": 1995,
            "summary": "A group of professional bank robbers...",
            "genres": ["Action", "Crime", "Drama"],
            "medium_cover_image": "https://img.yts.mx/heat/medium-cover.jpg",
            "large_cover_image": "https://img.yts.mx/heat/large-cover.jpg"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 10);
        assert_eq!(item.cover_image, "https://img.yts.mx/heat/medium-cover.jpg");
        assert_eq!(item.genre_line(), "Action · Crime · Drama");
    }

    #[test]
    fn test_item_accepts_cover_img_alias() {
        let json = r#"{"id":1,"title":"X","coverImg":"c.jpg","summary":"s","genres":[]}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.cover_image, "c.jpg");
    }

    #[test]
    fn test_item_missing_summary_fails() {
        let json = r#"{"id":1,"title":"X","coverImg":"c.jpg","genres":["a"]}"#;
        let err = serde_json::from_str::<Item>(json).unwrap_err();
        assert!(err.to_string().contains("summary"));
    }

    #[test]
    fn test_detail_item_optional_fields_default() {
        let json = r#"{"id":42,"title":"The Answer"}"#;
        let detail: DetailItem = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id, 42);
        assert_eq!(detail.year, None);
        assert!(detail.genres.is_empty());
        assert!(detail.description.is_empty());
        assert_eq!(detail.cover_image, None);
    }

    #[test]
    fn test_detail_item_from_yts_record() {
        let json = r#"{
            "id": 42,
            "title": "Heat",
            "year": 1995,
            "rating": 8.3,
            "runtime": 170,
            "genres": ["Action", "Crime"],
            "like_count": 512,
            "language": "en",
            "description_full": "Hunters and their prey.",
            "large_cover_image": "https://img.yts.mx/heat/large-cover.jpg"
        }"#;
        let detail: DetailItem = serde_json::from_str(json).unwrap();
        assert_eq!(detail.year, Some(1995));
        assert_eq!(detail.runtime_label().as_deref(), Some("2h 50m"));
        assert_eq!(detail.description, "Hunters and their prey.");
        assert_eq!(
            detail.cover_image.as_deref(),
            Some("https://img.yts.mx/heat/large-cover.jpg")
        );
    }

    #[test]
    fn test_runtime_label() {
        let mut detail: DetailItem =
            serde_json::from_str(r#"{"id":1,"title":"Short"}"#).unwrap();
        assert_eq!(detail.runtime_label(), None);
        detail.runtime = Some(0);
        assert_eq!(detail.runtime_label(), None);
        detail.runtime = Some(45);
        assert_eq!(detail.runtime_label().as_deref(), Some("45m"));
        detail.runtime = Some(61);
        assert_eq!(detail.runtime_label().as_deref(), Some("1h 01m"));
    }
}
