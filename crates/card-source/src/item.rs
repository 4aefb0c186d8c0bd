//! Card Records
//!
//! Wire shape of NocoDB records and the `DisplayItem` the carousel renders.

use serde::Deserialize;

/// Shown when a card has no image URL
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/280x280?text=No+Image";

/// A record as returned by the records endpoint. Every column is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub imageurl: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// A single carousel entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayItem {
    pub title: String,
    pub description: String,
    pub author: String,
    /// Empty when the record had no image
    pub image_url: String,
    pub link: Option<String>,
}

impl From<RawRecord> for DisplayItem {
    fn from(raw: RawRecord) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            author: raw.author.unwrap_or_default(),
            image_url: raw.imageurl.unwrap_or_default(),
            link: raw.link.filter(|l| !l.trim().is_empty()),
        }
    }
}

impl DisplayItem {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { "Untitled" } else { &self.title }
    }

    pub fn display_description(&self) -> &str {
        if self.description.is_empty() { "No description available" } else { &self.description }
    }

    pub fn display_author(&self) -> &str {
        if self.author.is_empty() { "Unknown" } else { &self.author }
    }

    /// Image source, falling back to the placeholder image
    pub fn image_src(&self) -> &str {
        if self.image_url.is_empty() { PLACEHOLDER_IMAGE_URL } else { &self.image_url }
    }

    pub fn alt_text(&self) -> &str {
        if self.title.is_empty() { "Card image" } else { &self.title }
    }
}

/// Body of a records response
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsBody {
    Page { list: Vec<RawRecord> },
    Bare(Vec<RawRecord>),
    Null(()),
}

/// Parse a records response body into display items.
///
/// Accepts the paged `{"list": [...]}` shape, a bare array, or an empty/null
/// body (zero records).
pub fn parse_records(body: &str) -> Result<Vec<DisplayItem>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records = match serde_json::from_str::<RecordsBody>(body)? {
        RecordsBody::Page { list } => list,
        RecordsBody::Bare(list) => list,
        RecordsBody::Null(()) => Vec::new(),
    };
    Ok(records.into_iter().map(DisplayItem::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_becomes_empty_string() {
        let items = parse_records(r#"{"list":[{"title":"A","author":"B"}]}"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].image_url, "");
        assert_eq!(items[0].image_src(), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_null_image_becomes_empty_string() {
        let items = parse_records(r#"[{"title":"A","imageurl":null}]"#).unwrap();
        assert_eq!(items[0].image_url, "");
    }

    #[test]
    fn test_full_record_mapping() {
        let body = r#"{
            "list": [{
                "Id": 7,
                "title": "Rust",
                "description": "Systems language",
                "author": "Ferris",
                "imageurl": "https://img.example/rust.png",
                "link": "https://rust-lang.org"
            }],
            "pageInfo": {"totalRows": 1, "page": 1, "pageSize": 25, "isFirstPage": true, "isLastPage": true}
        }"#;
        let items = parse_records(body).unwrap();
        assert_eq!(
            items[0],
            DisplayItem {
                title: "Rust".to_string(),
                description: "Systems language".to_string(),
                author: "Ferris".to_string(),
                image_url: "https://img.example/rust.png".to_string(),
                link: Some("https://rust-lang.org".to_string()),
            }
        );
    }

    #[test]
    fn test_camel_case_image_column() {
        let items = parse_records(r#"[{"imageUrl":"https://img.example/a.png"}]"#).unwrap();
        assert_eq!(items[0].image_url, "https://img.example/a.png");
    }

    #[test]
    fn test_empty_bodies() {
        assert!(parse_records("").unwrap().is_empty());
        assert!(parse_records("null").unwrap().is_empty());
        assert!(parse_records(r#"{"list":[]}"#).unwrap().is_empty());
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_unexpected_shape_is_error() {
        assert!(parse_records(r#"{"msg":"nope"}"#).is_err());
        assert!(parse_records("not json").is_err());
    }

    #[test]
    fn test_fallback_texts() {
        let item = DisplayItem::from(RawRecord::default());
        assert_eq!(item.display_title(), "Untitled");
        assert_eq!(item.display_description(), "No description available");
        assert_eq!(item.display_author(), "Unknown");
        assert_eq!(item.alt_text(), "Card image");
        assert_eq!(item.link, None);
    }

    #[test]
    fn test_blank_link_is_none() {
        let item = DisplayItem::from(RawRecord {
            link: Some("  ".to_string()),
            ..Default::default()
        });
        assert_eq!(item.link, None);
    }
}
