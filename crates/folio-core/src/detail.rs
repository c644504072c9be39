//! Project detail page view model.

use crate::fragment::category_href;
use crate::slider::{image_slides, Slide, VideoLayout};
use crate::types::Project;

/// The detail page's list section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSection {
    /// Not shown (music projects, or nothing to list)
    Hidden,
    Features(Vec<String>),
    Projects(Vec<String>),
}

impl ListSection {
    pub fn for_project(project: &Project) -> Self {
        if project.is_music() {
            return ListSection::Hidden;
        }
        match (&project.projects, &project.features) {
            (Some(items), _) => ListSection::Projects(items.clone()),
            (None, Some(items)) => ListSection::Features(items.clone()),
            (None, None) => ListSection::Hidden,
        }
    }

    pub fn heading(&self) -> Option<&'static str> {
        match self {
            ListSection::Hidden => None,
            ListSection::Features(_) => Some("Features"),
            ListSection::Projects(_) => Some("Projects"),
        }
    }

    pub fn items(&self) -> &[String] {
        match self {
            ListSection::Hidden => &[],
            ListSection::Features(items) | ListSection::Projects(items) => items,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ListSection::Hidden)
    }
}

/// Everything the detail page displays for one project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub id: String,
    /// Browser tab title
    pub page_title: String,
    pub title: String,
    pub description: String,
    pub category_label: String,
    /// "Back to projects" link restoring this project's category
    pub back_href: String,
    pub technologies: Vec<String>,
    pub list: ListSection,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub audio_url: Option<String>,
    pub images: Vec<Slide>,
    pub videos: VideoLayout,
}

impl ProjectDetail {
    /// Build the view model. `tagline` is appended to the page title.
    pub fn new(project: &Project, tagline: &str) -> Self {
        Self {
            id: project.id.clone(),
            page_title: format!("{} | {}", project.title, tagline),
            title: project.title.clone(),
            description: project.long_description().to_string(),
            category_label: project.category_label(),
            back_href: category_href(&project.category),
            technologies: project.technologies.clone(),
            list: ListSection::for_project(project),
            live_url: project.live_link().map(str::to_string),
            github_url: project.github_link().map(str::to_string),
            audio_url: project.audio().map(str::to_string),
            images: image_slides(project),
            videos: VideoLayout::for_project(project),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(json: &str) -> Project {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_music_hides_list_even_with_features() {
        let p = project(
            r#"{ "id": "a", "title": "A", "category": "music", "features": ["x"] }"#,
        );
        assert_eq!(ListSection::for_project(&p), ListSection::Hidden);
    }

    #[test]
    fn test_projects_take_precedence() {
        let p = project(
            r#"{ "id": "a", "title": "A", "category": "web",
                 "features": ["f"], "projects": ["p1", "p2"] }"#,
        );
        let list = ListSection::for_project(&p);
        assert_eq!(list.heading(), Some("Projects"));
        assert_eq!(list.items(), &["p1".to_string(), "p2".to_string()]);
    }

    #[test]
    fn test_features_heading() {
        let p = project(r#"{ "id": "a", "title": "A", "category": "web", "features": ["f"] }"#);
        let list = ListSection::for_project(&p);
        assert_eq!(list.heading(), Some("Features"));
        assert!(list.is_visible());
    }

    #[test]
    fn test_nothing_to_list_is_hidden() {
        let p = project(r#"{ "id": "a", "title": "A", "category": "web" }"#);
        assert!(!ListSection::for_project(&p).is_visible());
        assert!(ListSection::Hidden.items().is_empty());
    }

    #[test]
    fn test_detail_fields() {
        let p = project(
            r##"{
                "id": "poster",
                "title": "Poster",
                "description": "short",
                "fullDescription": "long",
                "category": "graphic design",
                "technologies": ["Figma"],
                "liveUrl": "https://example.com",
                "githubUrl": "#",
                "images": ["1.jpg", "2.jpg"],
                "videoUrls": ["https://www.youtube.com/embed/q"]
            }"##,
        );
        let detail = ProjectDetail::new(&p, "Creative Developer");
        assert_eq!(detail.page_title, "Poster | Creative Developer");
        assert_eq!(detail.description, "long");
        assert_eq!(detail.category_label, "Graphic design");
        assert_eq!(detail.back_href, "/#projects?category=graphic%20design");
        assert_eq!(detail.live_url.as_deref(), Some("https://example.com"));
        assert_eq!(detail.github_url, None);
        assert_eq!(detail.audio_url, None);
        assert_eq!(detail.images.len(), 2);
        assert!(matches!(detail.videos, VideoLayout::Single(_)));
    }
}
