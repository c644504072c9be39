//! Site configuration.

use std::time::Duration;

/// Default location of the project catalog, relative to the site root.
pub const DEFAULT_DATA_URL: &str = "projects.json";

/// How long the "copied" confirmation stays visible.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// Distance scrolled past the projects heading so it clears the top bar.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Static settings of one portfolio site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// URL of `projects.json`
    pub data_url: String,
    /// Appended to detail page titles: "<project> | <tagline>"
    pub tagline: String,
    /// Address copied by the contact button
    pub contact_email: String,
    /// Phrases cycled by the hero typewriter
    pub hero_phrases: Vec<String>,
}

impl SiteConfig {
    /// Override the catalog location.
    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = url.into();
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            tagline: "Creative Developer".to_string(),
            contact_email: "hello@example.com".to_string(),
            hero_phrases: vec![
                "creative developer".to_string(),
                "sound designer".to_string(),
            ],
        }
    }
}
