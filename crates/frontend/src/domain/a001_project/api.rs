use async_trait::async_trait;
use contracts::domain::a001_project::aggregate::{Project, ProjectListResponse};
use gloo_net::http::Request;
use thiserror::Error;

/// Why a listing request did not produce projects.
///
/// The UI collapses every variant into the same failure view; the variants
/// only matter for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Source of project listings
#[async_trait(?Send)]
pub trait ProjectSource {
    /// Issue a single GET to `url` and decode the listing body
    async fn fetch_listing(&self, url: &str) -> Result<ProjectListResponse, FetchError>;
}

/// Listing API reached through the browser `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpProjectSource;

#[async_trait(?Send)]
impl ProjectSource for HttpProjectSource {
    async fn fetch_listing(&self, url: &str) -> Result<ProjectListResponse, FetchError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        // Error bodies are not read
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<ProjectListResponse>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Fetch the listing at `url` and turn it into projects
pub async fn load_projects<S>(source: &S, url: &str) -> Result<Vec<Project>, FetchError>
where
    S: ProjectSource + ?Sized,
{
    log::info!("Fetching projects: {}", url);
    let listing = source.fetch_listing(url).await?;
    let projects = listing.into_projects();
    log::debug!("Fetched {} projects from {}", projects.len(), url);
    Ok(projects)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use contracts::domain::a001_project::aggregate::ProjectRecord;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Stub source returning a canned outcome and recording requested URLs
    pub(crate) struct StubSource {
        pub outcome: Result<ProjectListResponse, FetchError>,
        pub requested: RefCell<Vec<String>>,
    }

    impl StubSource {
        pub fn ok(records: Vec<ProjectRecord>) -> Self {
            Self {
                outcome: Ok(ProjectListResponse { projects: records }),
                requested: RefCell::new(Vec::new()),
            }
        }

        pub fn err(error: FetchError) -> Self {
            Self {
                outcome: Err(error),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ProjectSource for StubSource {
        async fn fetch_listing(&self, url: &str) -> Result<ProjectListResponse, FetchError> {
            self.requested.borrow_mut().push(url.to_string());
            self.outcome.clone()
        }
    }

    pub(crate) fn record(id: &str, image_url: &str, name: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            image_url: image_url.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_load_projects_transforms_records() {
        let source = StubSource::ok(vec![
            record("1", "http://x/1.png", "Foo"),
            record("2", "http://x/2.png", "Bar"),
        ]);

        let projects = block_on(load_projects(&source, "http://fake?category=ALL")).unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].image_url, "http://x/1.png");
        assert_eq!(projects[0].name, "Foo");
        assert_eq!(projects[1].id, "2");
        assert_eq!(*source.requested.borrow(), vec!["http://fake?category=ALL".to_string()]);
    }

    #[test]
    fn test_load_projects_propagates_errors() {
        let source = StubSource::err(FetchError::Status(503));
        let result = block_on(load_projects(&source, "http://fake"));
        assert_eq!(result, Err(FetchError::Status(503)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP error: 404");
        assert_eq!(
            FetchError::Decode("missing field `projects`".into()).to_string(),
            "Failed to parse response: missing field `projects`"
        );
    }
}
