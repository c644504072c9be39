//! Project - one portfolio entry as stored in `projects.json`.

use serde::{Deserialize, Deserializer, Serialize};

/// Link value authors use in `projects.json` for "no link yet".
pub const PLACEHOLDER_URL: &str = "#";

/// Category whose detail page never shows a features/projects list.
pub const MUSIC_CATEGORY: &str = "music";

/// A single portfolio entry.
///
/// Field names follow the camelCase keys of the JSON document. Lists,
/// flags and the short description default when missing or `null`, so a
/// sparse or hand-edited entry still deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier, used as the detail page's `id` parameter
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Long-form text for the detail page
    #[serde(default)]
    pub full_description: Option<String>,
    pub category: String,

    /// Single fallback image (gallery background, slider fallback)
    #[serde(default)]
    pub image: Option<String>,
    /// Ordered slider images; take precedence over `image`
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    /// Ordered video URLs, either playable files or embed URLs
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_urls: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    /// Sub-projects; when present the list section is headed "Projects"
    #[serde(default)]
    pub projects: Option<Vec<String>>,

    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,

    /// Included in the default "all" gallery view
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlight: bool,
}

impl Project {
    /// Category with its first letter upper-cased, as shown on labels.
    pub fn category_label(&self) -> String {
        capitalize(&self.category)
    }

    /// Whether this is a music project (hides the detail list section).
    pub fn is_music(&self) -> bool {
        self.category == MUSIC_CATEGORY
    }

    /// Audio URL, if the project carries one worth wiring a player to.
    pub fn audio(&self) -> Option<&str> {
        self.audio_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Text for the detail page, falling back to the short description.
    pub fn long_description(&self) -> &str {
        self.full_description
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(&self.description)
    }

    /// Live demo link, hidden when absent or a placeholder.
    pub fn live_link(&self) -> Option<&str> {
        external_link(self.live_url.as_deref())
    }

    /// Source repository link, hidden when absent or a placeholder.
    pub fn github_link(&self) -> Option<&str> {
        external_link(self.github_url.as_deref())
    }

    /// Slider image sources: `images` when non-empty, else `image`.
    pub fn slide_images(&self) -> Vec<&str> {
        if !self.images.is_empty() {
            self.images.iter().map(String::as_str).collect()
        } else {
            self.image.as_deref().into_iter().collect()
        }
    }
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn external_link(url: Option<&str>) -> Option<&str> {
    url.filter(|u| !u.is_empty() && *u != PLACEHOLDER_URL)
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        serde_json::from_str(
            r##"{
                "id": "tape-loop",
                "title": "Tape Loop",
                "description": "Short",
                "category": "music",
                "image": "img/tape.jpg",
                "audioUrl": "audio/tape.mp3",
                "liveUrl": "#",
                "highlight": true
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_sparse_entry_deserializes_with_defaults() {
        let project = sample();
        assert!(project.images.is_empty());
        assert!(project.video_urls.is_empty());
        assert!(project.technologies.is_empty());
        assert_eq!(project.features, None);
        assert_eq!(project.github_url, None);
    }

    #[test]
    fn test_null_fields_deserialize_as_defaults() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": "a",
                "title": "A",
                "description": null,
                "category": "web",
                "images": null,
                "videoUrls": null,
                "technologies": null,
                "features": null,
                "highlight": null
            }"#,
        )
        .unwrap();
        assert_eq!(project.description, "");
        assert!(project.images.is_empty());
        assert!(project.video_urls.is_empty());
        assert!(project.technologies.is_empty());
        assert_eq!(project.features, None);
        assert!(!project.highlight);
    }

    #[test]
    fn test_placeholder_link_is_hidden() {
        let mut project = sample();
        assert_eq!(project.live_link(), None);
        assert_eq!(project.github_link(), None);

        project.github_url = Some("https://github.com/example/tape".to_string());
        assert_eq!(project.github_link(), Some("https://github.com/example/tape"));

        project.live_url = Some(String::new());
        assert_eq!(project.live_link(), None);
    }

    #[test]
    fn test_slide_images_prefers_images() {
        let mut project = sample();
        assert_eq!(project.slide_images(), vec!["img/tape.jpg"]);

        project.images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        assert_eq!(project.slide_images(), vec!["a.jpg", "b.jpg"]);

        project.images.clear();
        project.image = None;
        assert!(project.slide_images().is_empty());
    }

    #[test]
    fn test_long_description_fallback() {
        let mut project = sample();
        assert_eq!(project.long_description(), "Short");
        project.full_description = Some("A much longer story".to_string());
        assert_eq!(project.long_description(), "A much longer story");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("music"), "Music");
        assert_eq!(capitalize("Design"), "Design");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn test_category_helpers() {
        let project = sample();
        assert!(project.is_music());
        assert_eq!(project.category_label(), "Music");
        assert_eq!(project.audio(), Some("audio/tape.mp3"));
    }
}
