use log::error;
use serde::Deserialize;

use crate::components::carousel::Slide;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SiteContent {
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
    #[serde(default)]
    pub cover_slides: Vec<Slide>,
    #[serde(default)]
    pub preview_slides: Vec<Slide>,
    #[serde(default)]
    pub daily_slides: Vec<Slide>,
}

pub fn parse_site_content(raw: &str) -> SiteContent {
    match serde_json::from_str::<SiteContent>(raw) {
        Ok(content) => content,
        Err(e) => {
            // Empty lists render as the carousel placeholder
            error!("Failed to parse site content: {}", e);
            SiteContent::default()
        }
    }
}

pub fn site_content() -> SiteContent {
    parse_site_content(SITE_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = site_content();
        assert_eq!(content.faqs.len(), 3);
        assert!(!content.cover_slides.is_empty());
        assert!(!content.preview_slides.is_empty());
        assert_eq!(content.daily_slides.len(), 6);
    }

    #[test]
    fn slide_alt_text_is_kept() {
        let content = site_content();
        assert_eq!(content.daily_slides[0].alt, "Saramatic Daily Page 1");
        assert!(content.daily_slides.iter().all(|s| s.src.starts_with("/assets/")));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let content = parse_site_content(r#"{ "faqs": [] }"#);
        assert!(content.cover_slides.is_empty());
        assert!(content.daily_slides.is_empty());
    }

    #[test]
    fn malformed_content_degrades_to_empty() {
        let content = parse_site_content("{ not json");
        assert_eq!(content, SiteContent::default());
    }
}
