//! URL conventions shared by the home and detail pages.
//!
//! - Home fragment protocol: `#projects?category=<value>` selects a category
//!   on load and is normalized to `#projects` afterwards.
//! - Detail page: `/project?id=<value>`.
//! - Detail back link: `/#projects?category=<value>`.

/// Fragment of the home page's project section.
pub const PROJECTS_FRAGMENT: &str = "#projects";

/// Where pages send the browser when project data is unavailable.
pub const HOME_PROJECTS_HREF: &str = "/#projects";

/// Path of the project detail route.
pub const PROJECT_PATH: &str = "/project";

const CATEGORY_FRAGMENT_PREFIX: &str = "#projects?";

/// Extract the category requested by a home-page fragment.
///
/// Returns `None` unless the fragment has the form
/// `#projects?category=<value>` with a non-empty value.
pub fn category_from_fragment(hash: &str) -> Option<String> {
    let query = hash.strip_prefix(CATEGORY_FRAGMENT_PREFIX)?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "category")
        .map(|(_, value)| decode_component(value))
        .filter(|value| !value.is_empty())
}

/// Href of the home page with `category` preselected.
pub fn category_href(category: &str) -> String {
    format!(
        "/{}category={}",
        CATEGORY_FRAGMENT_PREFIX,
        urlencoding::encode(category)
    )
}

/// Href of a project's detail page.
pub fn project_href(id: &str) -> String {
    format!("{}?id={}", PROJECT_PATH, urlencoding::encode(id))
}

/// The detail page's `id` parameter, or `None` when it is empty.
pub fn project_id_param(raw: &str) -> Option<&str> {
    Some(raw).filter(|id| !id.is_empty())
}

/// Decode a query value the way browsers decode `URLSearchParams`.
fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_fragment() {
        assert_eq!(
            category_from_fragment("#projects?category=music"),
            Some("music".to_string())
        );
        assert_eq!(
            category_from_fragment("#projects?utm=x&category=sound%20design"),
            Some("sound design".to_string())
        );
        assert_eq!(
            category_from_fragment("#projects?category=sound+design"),
            Some("sound design".to_string())
        );
    }

    #[test]
    fn test_category_from_fragment_rejects_other_shapes() {
        assert_eq!(category_from_fragment(""), None);
        assert_eq!(category_from_fragment("#projects"), None);
        assert_eq!(category_from_fragment("#about?category=music"), None);
        assert_eq!(category_from_fragment("#projects?category="), None);
        assert_eq!(category_from_fragment("#projects?sort=new"), None);
    }

    #[test]
    fn test_category_href_round_trips_through_fragment() {
        let href = category_href("sound & light");
        assert_eq!(href, "/#projects?category=sound%20%26%20light");

        let fragment = href.trim_start_matches('/');
        assert_eq!(
            category_from_fragment(fragment),
            Some("sound & light".to_string())
        );
    }

    #[test]
    fn test_project_id_param() {
        assert_eq!(project_id_param("synth-pad"), Some("synth-pad"));
        assert_eq!(project_id_param(""), None);
    }

    #[test]
    fn test_project_href() {
        assert_eq!(project_href("tape-loop"), "/project?id=tape-loop");
        assert_eq!(project_href("a b"), "/project?id=a%20b");
    }
}
