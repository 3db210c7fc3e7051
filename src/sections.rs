//! Portfolio content: the section catalog and client animation constants.
//!
//! The catalog is fixed at startup and read-only afterwards; request
//! handling never creates, mutates, or destroys a section. The raw list and
//! the scroll/animation constants are also serialized into the page as JSON
//! for the client script.

use serde::Serialize;

use crate::config::ConfigError;

/// One static content block of the portfolio page.
///
/// Exactly one of `content`/`lines` is populated per built-in section:
/// `content` carries the terminal-style body of the about block, `lines`
/// the teaser text of everything else. Empty collections and `None` fields
/// are omitted from the serialized form.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// Variant discriminator; `terminal` renders as a shell window.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    /// Client-side behavior tag (e.g. `experience`, `book`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// External URL the section points at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Section {
    /// Whether the template should render this section as a terminal window.
    pub fn is_terminal(&self) -> bool {
        self.kind.as_deref() == Some("terminal")
    }
}

/// The built-in catalog, in display order.
pub fn builtin_sections() -> Vec<Section> {
    vec![
        Section {
            id: "terminal".to_string(),
            title: "About".to_string(),
            kind: Some("terminal".to_string()),
            content: vec![
                "Nate Swenson".to_string(),
                "Senior DevOps Engineer @ GoodLeap".to_string(),
                "AI Enthusiast | Continuous Learner".to_string(),
                "Author of DevOps Career Handbook".to_string(),
            ],
            lines: Vec::new(),
            action: None,
            link: None,
        },
        Section {
            id: "resume".to_string(),
            title: "Resume".to_string(),
            kind: None,
            content: Vec::new(),
            lines: vec![
                "...view my experience, recommendations, and download my resume".to_string(),
            ],
            action: Some("experience".to_string()),
            link: None,
        },
        Section {
            id: "custom-vibez".to_string(),
            title: "Custom Vibez".to_string(),
            kind: None,
            content: Vec::new(),
            lines: vec!["...get your custom engineered site or app".to_string()],
            action: None,
            link: Some("https://custom-vibez.com".to_string()),
        },
        Section {
            id: "devops-career-handbook".to_string(),
            title: "DevOps Career Handbook".to_string(),
            kind: None,
            content: Vec::new(),
            lines: vec!["...purchase a copy of my book on Amazon".to_string()],
            action: Some("book".to_string()),
            link: None,
        },
        Section {
            id: "github".to_string(),
            title: "GitHub".to_string(),
            kind: None,
            content: Vec::new(),
            lines: vec!["...view my contributions on GitHub".to_string()],
            action: None,
            link: Some("https://github.com/natejswenson".to_string()),
        },
    ]
}

/// Validated, read-only section list shared across requests.
#[derive(Debug, Clone)]
pub struct SectionRepository {
    sections: Vec<Section>,
}

impl SectionRepository {
    /// Rejects an empty catalog up front rather than letting the looping
    /// step fail mid-request.
    pub fn new(sections: Vec<Section>) -> Result<Self, ConfigError> {
        if sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        Ok(Self { sections })
    }

    /// Repository over the built-in catalog.
    pub fn builtin() -> Self {
        Self {
            sections: builtin_sections(),
        }
    }

    pub fn all(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Client scroll tuning, serialized into the page as `SCROLL_CONFIG`.
///
/// Key casing matches what the client script consumes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScrollConfig {
    /// Pixels from either edge that trigger the loop reset.
    #[serde(rename = "THRESHOLD")]
    pub threshold: u32,
    /// Delay in ms before scroll events are honored again after a reset.
    #[serde(rename = "TRANSITION_DELAY")]
    pub transition_delay: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: 50,
            transition_delay: 50,
        }
    }
}

/// Proximity animation bounds for section scale/opacity, serialized into
/// the page as `ANIMATION`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnimationConfig {
    #[serde(rename = "SCALE_MIN")]
    pub scale_min: f64,
    #[serde(rename = "SCALE_MAX")]
    pub scale_max: f64,
    #[serde(rename = "OPACITY_MIN")]
    pub opacity_min: f64,
    #[serde(rename = "OPACITY_MAX")]
    pub opacity_max: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            scale_min: 0.6,
            scale_max: 1.0,
            opacity_min: 0.3,
            opacity_max: 1.0,
        }
    }
}
