//! Gallery filtering and card view models.
//!
//! Rendering is split in two passes:
//!
//! 1. [`gallery_cards`] turns `(projects, selection)` into plain card data.
//!    It is pure; rendering the same selection twice yields the same cards.
//! 2. The UI renders those cards and attaches behavior (navigation, audio)
//!    to what it rendered.
//!
//! [`GalleryController`] owns the loaded catalog and the current selection,
//! replacing the page-level globals a script would otherwise keep.

use crate::fragment::{category_from_fragment, project_href};
use crate::playback::AudioHooks;
use crate::types::{capitalize, Catalog, Project};

/// Selection value meaning "highlighted projects of every category".
pub const ALL_CATEGORY: &str = "all";

/// Label of the highlights control.
pub const HIGHLIGHTS_LABEL: &str = "Highlights";

/// Current gallery selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Highlighted projects only, any category (`"all"`)
    #[default]
    Highlights,
    /// Every project of one category, highlighted or not
    Category(String),
}

impl CategoryFilter {
    /// Parse a selection value as it appears in controls and URLs.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORY {
            CategoryFilter::Highlights
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    /// Selection value (`"all"` or the category name).
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::Highlights => ALL_CATEGORY,
            CategoryFilter::Category(category) => category,
        }
    }

    /// Text shown on the category control.
    pub fn label(&self) -> String {
        match self {
            CategoryFilter::Highlights => HIGHLIGHTS_LABEL.to_string(),
            CategoryFilter::Category(category) => capitalize(category),
        }
    }

    /// Filter predicate.
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::Highlights => project.highlight,
            CategoryFilter::Category(category) => project.category == *category,
        }
    }

    /// Cards carry a category overlay only in the highlights view.
    pub fn shows_category_labels(&self) -> bool {
        matches!(self, CategoryFilter::Highlights)
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered gallery card.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryCard {
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Background image
    pub image: Option<String>,
    /// Capitalized category overlay (highlights view only)
    pub label: Option<String>,
    pub audio_url: Option<String>,
    /// Detail page link
    pub href: String,
}

impl GalleryCard {
    fn new(project: &Project, filter: &CategoryFilter) -> Self {
        let label = (filter.shows_category_labels() && project.highlight)
            .then(|| project.category_label());

        Self {
            project_id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            category: project.category.clone(),
            image: project.image.clone(),
            label,
            audio_url: project.audio().map(str::to_string),
            href: project_href(&project.id),
        }
    }

    /// DOM hooks of this card's audio controls, keyed by project id.
    pub fn audio_hooks(&self) -> Option<AudioHooks> {
        self.audio_url
            .as_ref()
            .map(|_| AudioHooks::for_project(&self.project_id))
    }
}

/// Cards for every project matching `filter`, in catalog order.
pub fn gallery_cards(projects: &[Project], filter: &CategoryFilter) -> Vec<GalleryCard> {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .map(|project| GalleryCard::new(project, filter))
        .collect()
}

/// A category control in the filter bar.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryControl {
    pub filter: CategoryFilter,
    pub label: String,
    pub active: bool,
}

/// What the home page should do after inspecting its URL fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSelection {
    /// Category that was selected
    pub filter: CategoryFilter,
    /// Fragment to replace the current one with
    pub normalized: &'static str,
}

/// Owns the home page's catalog and category selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryController {
    catalog: Catalog,
    selection: CategoryFilter,
}

impl GalleryController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: CategoryFilter::default(),
        }
    }

    /// Install the catalog once it has been fetched. The selection is kept,
    /// so a fragment applied before the fetch finished still counts.
    pub fn load(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &CategoryFilter {
        &self.selection
    }

    /// Select a category. Returns whether the selection changed.
    pub fn select(&mut self, filter: CategoryFilter) -> bool {
        if self.selection == filter {
            return false;
        }
        tracing::info!(from = %self.selection, to = %filter, "Category selected");
        self.selection = filter;
        true
    }

    /// Apply a `#projects?category=<value>` fragment, if that is what `hash` is.
    pub fn apply_fragment(&mut self, hash: &str) -> Option<FragmentSelection> {
        let category = category_from_fragment(hash)?;
        let filter = CategoryFilter::parse(&category);
        self.select(filter.clone());
        Some(FragmentSelection {
            filter,
            normalized: crate::fragment::PROJECTS_FRAGMENT,
        })
    }

    /// Cards for the current selection.
    pub fn cards(&self) -> Vec<GalleryCard> {
        gallery_cards(&self.catalog.projects, &self.selection)
    }

    /// Filter controls: highlights first, then each catalog category.
    ///
    /// A selected category missing from the catalog (e.g. from a stale link)
    /// gets a control too, so the active state is always visible.
    pub fn controls(&self) -> Vec<CategoryControl> {
        let mut filters = vec![CategoryFilter::Highlights];
        filters.extend(
            self.catalog
                .categories()
                .into_iter()
                .map(|c| CategoryFilter::Category(c.to_string())),
        );
        if !filters.contains(&self.selection) {
            filters.push(self.selection.clone());
        }

        filters
            .into_iter()
            .map(|filter| CategoryControl {
                label: filter.label(),
                active: filter == self.selection,
                filter,
            })
            .collect()
    }
}
