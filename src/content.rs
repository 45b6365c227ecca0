//! Landing-page records. Each record is authored as JSON under `content/`,
//! embedded at compile time and checked once before it is ever rendered.

use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use crate::page::PageId;

const DEFAULT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1525182008055-f88b95ff7980?q=80&w=2070&auto=format&fit=crop";
const DEFAULT_ACCENT_GRADIENT: &str =
    "linear-gradient(to bottom right, rgba(197, 160, 89, 0.6), rgba(255, 255, 255, 0.1), rgba(17, 17, 17, 0.6))";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("malformed content record: {0}")]
    Parse(String),
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("`{0}` needs at least one entry")]
    EmptyList(&'static str),
    #[error("`{list}` entry {index} has an empty `{field}`")]
    EmptyEntry {
        list: &'static str,
        index: usize,
        field: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Offering {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rationale {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryItem {
    pub image: String,
    pub caption: String,
}

/// Headings of the three list blocks of a landing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionTitles {
    pub offerings: String,
    pub rationale: String,
    pub process: String,
}

impl Default for SectionTitles {
    fn default() -> Self {
        Self {
            offerings: "What We Create".to_string(),
            rationale: "Why FOMUS".to_string(),
            process: "Process".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LandingPageContent {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub hero_image: Option<String>,
    /// CSS background layered over the hero image.
    #[serde(default)]
    pub accent_gradient: Option<String>,
    #[serde(default)]
    pub chips: Vec<String>,
    pub intro: String,
    pub offerings: Vec<Offering>,
    pub rationale: Vec<Rationale>,
    pub process: Vec<String>,
    pub closing_message: String,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub section_titles: SectionTitles,
}

fn require(value: &str, field: &'static str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField(field));
    }
    Ok(())
}

fn require_entry(
    value: &str,
    list: &'static str,
    index: usize,
    field: &'static str,
) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyEntry { list, index, field });
    }
    Ok(())
}

impl LandingPageContent {
    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        let content: Self =
            serde_json::from_str(source).map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        require(&self.title, "title")?;
        require(&self.subtitle, "subtitle")?;
        require(&self.intro, "intro")?;
        require(&self.closing_message, "closing_message")?;

        if self.offerings.is_empty() {
            return Err(ContentError::EmptyList("offerings"));
        }
        if self.rationale.is_empty() {
            return Err(ContentError::EmptyList("rationale"));
        }
        if self.process.is_empty() {
            return Err(ContentError::EmptyList("process"));
        }

        for (index, chip) in self.chips.iter().enumerate() {
            require_entry(chip, "chips", index, "label")?;
        }
        for (index, offering) in self.offerings.iter().enumerate() {
            require_entry(&offering.title, "offerings", index, "title")?;
            require_entry(&offering.description, "offerings", index, "description")?;
        }
        for (index, item) in self.rationale.iter().enumerate() {
            require_entry(&item.title, "rationale", index, "title")?;
            require_entry(&item.description, "rationale", index, "description")?;
        }
        for (index, step) in self.process.iter().enumerate() {
            require_entry(step, "process", index, "label")?;
        }
        for (index, item) in self.gallery.iter().enumerate() {
            require_entry(&item.image, "gallery", index, "image")?;
        }
        Ok(())
    }

    pub fn hero_image(&self) -> &str {
        self.hero_image.as_deref().unwrap_or(DEFAULT_HERO_IMAGE)
    }

    pub fn accent_gradient(&self) -> &str {
        self.accent_gradient.as_deref().unwrap_or(DEFAULT_ACCENT_GRADIENT)
    }
}

/// The pages rendered through the shared landing layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingKind {
    Comic,
    Visual,
    Point,
}

impl LandingKind {
    pub fn page(self) -> PageId {
        match self {
            LandingKind::Comic => PageId::Comic,
            LandingKind::Visual => PageId::Visual,
            LandingKind::Point => PageId::Point,
        }
    }

    fn source(self) -> &'static str {
        match self {
            LandingKind::Comic => include_str!("../content/comic.json"),
            LandingKind::Visual => include_str!("../content/visual.json"),
            LandingKind::Point => include_str!("../content/point.json"),
        }
    }

    fn cell(self) -> &'static OnceLock<Result<LandingPageContent, ContentError>> {
        static COMIC: OnceLock<Result<LandingPageContent, ContentError>> = OnceLock::new();
        static VISUAL: OnceLock<Result<LandingPageContent, ContentError>> = OnceLock::new();
        static POINT: OnceLock<Result<LandingPageContent, ContentError>> = OnceLock::new();
        match self {
            LandingKind::Comic => &COMIC,
            LandingKind::Visual => &VISUAL,
            LandingKind::Point => &POINT,
        }
    }

    /// Bundled record for this page, parsed and validated on first use.
    pub fn content(self) -> Result<&'static LandingPageContent, ContentError> {
        self.cell()
            .get_or_init(|| LandingPageContent::from_json(self.source()))
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl TryFrom<PageId> for LandingKind {
    type Error = PageId;

    fn try_from(page: PageId) -> Result<Self, Self::Error> {
        match page {
            PageId::Comic => Ok(LandingKind::Comic),
            PageId::Visual => Ok(LandingKind::Visual),
            PageId::Point => Ok(LandingKind::Point),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [LandingKind; 3] = [LandingKind::Comic, LandingKind::Visual, LandingKind::Point];

    const MINIMAL: &str = r#"{
        "title": "Test Studio",
        "subtitle": "sub",
        "intro": "intro",
        "offerings": [
            {"title": "First", "description": "one"},
            {"title": "Second", "description": "two", "image": "https://example.com/2.jpg"},
            {"title": "Third", "description": "three"}
        ],
        "rationale": [{"title": "Why", "description": "because"}],
        "process": ["Ask", "Make"],
        "closing_message": "Talk to us"
    }"#;

    #[test]
    fn bundled_records_are_valid() {
        for kind in KINDS {
            let content = kind.content().unwrap();
            assert!(!content.title.is_empty(), "{:?}", kind);
        }
    }

    #[test]
    fn comic_record_matches_division() {
        let comic = LandingKind::Comic.content().unwrap();
        assert_eq!(comic.title, "Story-to-Comic Studio");
        assert_eq!(comic.gallery.len(), 4);
        assert_eq!(comic.offerings.len(), 6);
        assert_eq!(comic.process.first().map(String::as_str), Some("お問い合わせ"));
    }

    #[test]
    fn point_record_overrides_headings() {
        let point = LandingKind::Point.content().unwrap();
        assert!(point.gallery.is_empty());
        assert!(point.chips.is_empty());
        assert_eq!(point.section_titles.offerings, "Membership Benefits");
        assert_eq!(point.section_titles.rationale, "Program Concept");
        assert_eq!(point.section_titles.process, "How it Works");
        assert_eq!(point.hero_image(), DEFAULT_HERO_IMAGE);
        assert_eq!(point.accent_gradient(), DEFAULT_ACCENT_GRADIENT);
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let content = LandingPageContent::from_json(MINIMAL).unwrap();
        assert_eq!(content.section_titles, SectionTitles::default());
        assert!(content.gallery.is_empty());
        assert_eq!(content.offerings[1].image.as_deref(), Some("https://example.com/2.jpg"));
        assert_eq!(content.offerings[0].image, None);
    }

    #[test]
    fn lists_keep_authored_order() {
        let content = LandingPageContent::from_json(MINIMAL).unwrap();
        let titles: Vec<_> = content.offerings.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
        assert_eq!(content.process, ["Ask", "Make"]);
    }

    #[test]
    fn rejects_blank_title() {
        let source = MINIMAL.replace(r#""title": "Test Studio""#, r#""title": "  ""#);
        assert_eq!(
            LandingPageContent::from_json(&source),
            Err(ContentError::EmptyField("title"))
        );
    }

    #[test]
    fn rejects_empty_process() {
        let source = MINIMAL.replace(r#"["Ask", "Make"]"#, "[]");
        assert_eq!(
            LandingPageContent::from_json(&source),
            Err(ContentError::EmptyList("process"))
        );
    }

    #[test]
    fn points_at_blank_entry() {
        let source = MINIMAL.replace(r#""Make""#, r#""""#);
        assert_eq!(
            LandingPageContent::from_json(&source),
            Err(ContentError::EmptyEntry {
                list: "process",
                index: 1,
                field: "label"
            })
        );
    }

    #[test]
    fn rejects_unknown_fields_and_bad_json() {
        let source = MINIMAL.replacen('{', r#"{"heading": "x","#, 1);
        assert!(matches!(
            LandingPageContent::from_json(&source),
            Err(ContentError::Parse(_))
        ));
        assert!(matches!(
            LandingPageContent::from_json("{"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn only_landing_pages_have_records() {
        for kind in KINDS {
            assert_eq!(LandingKind::try_from(kind.page()), Ok(kind));
        }
        assert_eq!(LandingKind::try_from(PageId::Kuku), Err(PageId::Kuku));
        assert_eq!(LandingKind::try_from(PageId::Home), Err(PageId::Home));
    }
}
