//! Endpoint configuration for the project listing API
//!
//! The listing endpoint is a template with a `{category}` placeholder. It is
//! provided to the component tree through context so the showcase can be
//! pointed at a different (or fake) endpoint without touching its code.

use contracts::enums::project_category::ProjectCategory;
use serde::Deserialize;

/// Default listing endpoint
pub const DEFAULT_ENDPOINT_TEMPLATE: &str = "https://apis.ccbp.in/ps/projects?category={category}";

const CATEGORY_PLACEHOLDER: &str = "{category}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    pub endpoint_template: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            endpoint_template: DEFAULT_ENDPOINT_TEMPLATE.to_string(),
        }
    }
}

/// Query parameters of the page URL that may override the config
#[derive(Debug, Default, Deserialize)]
struct LocationOverrides {
    endpoint: Option<String>,
}

impl ShowcaseConfig {
    pub fn new(endpoint_template: impl Into<String>) -> Self {
        Self {
            endpoint_template: endpoint_template.into(),
        }
    }

    /// Build the config from the current window location
    ///
    /// `?endpoint=<template>` replaces the default template. Falls back to the
    /// default if the window is not available or the query does not parse.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    fn from_query(search: &str) -> Self {
        let query = search.trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }
        match serde_qs::from_str::<LocationOverrides>(query) {
            Ok(LocationOverrides {
                endpoint: Some(endpoint),
            }) if !endpoint.trim().is_empty() => Self::new(endpoint),
            Ok(_) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring unparsable page query {:?}: {}", search, e);
                Self::default()
            }
        }
    }

    /// Listing URL for a category
    pub fn projects_url(&self, category: ProjectCategory) -> String {
        let code = urlencoding::encode(category.code());
        if self.endpoint_template.contains(CATEGORY_PLACEHOLDER) {
            return self.endpoint_template.replace(CATEGORY_PLACEHOLDER, &code);
        }
        let separator = if self.endpoint_template.contains('?') {
            '&'
        } else {
            '?'
        };
        format!("{}{}category={}", self.endpoint_template, separator, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let config = ShowcaseConfig::default();
        assert_eq!(
            config.projects_url(ProjectCategory::All),
            "https://apis.ccbp.in/ps/projects?category=ALL"
        );
        assert_eq!(
            config.projects_url(ProjectCategory::React),
            "https://apis.ccbp.in/ps/projects?category=REACT"
        );
    }

    #[test]
    fn test_template_without_placeholder() {
        assert_eq!(
            ShowcaseConfig::new("http://localhost:8080/projects").projects_url(ProjectCategory::Static),
            "http://localhost:8080/projects?category=STATIC"
        );
        assert_eq!(
            ShowcaseConfig::new("http://localhost:8080/projects?limit=10")
                .projects_url(ProjectCategory::Dynamic),
            "http://localhost:8080/projects?limit=10&category=DYNAMIC"
        );
    }

    #[test]
    fn test_placeholder_in_path() {
        assert_eq!(
            ShowcaseConfig::new("http://fake/{category}.json").projects_url(ProjectCategory::Responsive),
            "http://fake/RESPONSIVE.json"
        );
    }

    #[test]
    fn test_query_override() {
        let config = ShowcaseConfig::from_query("?endpoint=http%3A%2F%2Ffake%2Fprojects");
        assert_eq!(config.endpoint_template, "http://fake/projects");
    }

    #[test]
    fn test_query_without_override() {
        assert_eq!(ShowcaseConfig::from_query(""), ShowcaseConfig::default());
        assert_eq!(ShowcaseConfig::from_query("?foo=bar"), ShowcaseConfig::default());
        assert_eq!(ShowcaseConfig::from_query("?endpoint="), ShowcaseConfig::default());
    }
}
