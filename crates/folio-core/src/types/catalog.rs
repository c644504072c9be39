//! Catalog - the parsed `projects.json` document.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::fragment::project_id_param;
use crate::types::Project;

/// All projects of the site, in document order.
///
/// Loaded once per page view and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Parse a catalog from the JSON text of `projects.json`.
    pub fn from_json(text: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// First project carrying `id`.
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Resolve the detail page's `id` parameter to a project.
    pub fn resolve(&self, id: Option<&str>) -> FolioResult<&Project> {
        let id = id
            .and_then(project_id_param)
            .ok_or(FolioError::MissingProjectId)?;
        self.find(id)
            .ok_or_else(|| FolioError::ProjectNotFound(id.to_string()))
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for project in &self.projects {
            if !seen.contains(&project.category.as_str()) {
                seen.push(&project.category);
            }
        }
        seen
    }

    /// Ids that occur more than once, each reported once.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut dupes: Vec<&str> = Vec::new();
        for (i, project) in self.projects.iter().enumerate() {
            let repeated = self.projects[..i].iter().any(|p| p.id == project.id);
            if repeated && !dupes.contains(&project.id.as_str()) {
                dupes.push(&project.id);
            }
        }
        dupes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "projects": [
            { "id": "a", "title": "A", "category": "music", "highlight": true },
            { "id": "b", "title": "B", "category": "design" },
            { "id": "c", "title": "C", "category": "music" },
            { "id": "a", "title": "A again", "category": "web" }
        ]
    }"#;

    #[test]
    fn test_from_json_tolerates_null_lists() {
        let catalog = Catalog::from_json(
            r#"{"projects":[{"id":"a","title":"A","category":"web",
                "images":null,"videoUrls":null,"highlight":null}]}"#,
        )
        .unwrap();
        let project = catalog.find("a").unwrap();
        assert!(project.video_urls.is_empty());
        assert!(!project.highlight);
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(DOC).unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_from_json_rejects_missing_projects_key() {
        let result = Catalog::from_json(r#"{ "items": [] }"#);
        assert!(matches!(result, Err(FolioError::Parse(_))));
    }

    #[test]
    fn test_find_returns_first_match() {
        let catalog = Catalog::from_json(DOC).unwrap();
        assert_eq!(catalog.find("a").unwrap().title, "A");
        assert!(catalog.find("zzz").is_none());
    }

    #[test]
    fn test_resolve() {
        let catalog = Catalog::from_json(DOC).unwrap();
        assert_eq!(catalog.resolve(Some("b")).unwrap().title, "B");
        assert!(matches!(catalog.resolve(None), Err(FolioError::MissingProjectId)));
        assert!(matches!(catalog.resolve(Some("")), Err(FolioError::MissingProjectId)));
        assert!(matches!(
            catalog.resolve(Some("nope")),
            Err(FolioError::ProjectNotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = Catalog::from_json(DOC).unwrap();
        assert_eq!(catalog.categories(), vec!["music", "design", "web"]);
    }

    #[test]
    fn test_duplicate_ids() {
        let catalog = Catalog::from_json(DOC).unwrap();
        assert_eq!(catalog.duplicate_ids(), vec!["a"]);
        assert!(Catalog::default().duplicate_ids().is_empty());
    }
}
