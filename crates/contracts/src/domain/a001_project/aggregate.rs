use serde::{Deserialize, Serialize};

// ============================================================================
// Wire format
// ============================================================================

/// Project record as delivered by the listing API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub image_url: String,
    pub name: String,
}

/// Body of `GET <endpoint>?category=<code>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectRecord>,
}

// ============================================================================
// Project
// ============================================================================

/// Project card shown in the showcase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,

    #[serde(rename = "imageUrl")]
    pub image_url: String,

    pub name: String,
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: record.id,
            image_url: record.image_url,
            name: record.name,
        }
    }
}

impl ProjectListResponse {
    /// Convert the raw records into projects, keeping response order
    pub fn into_projects(self) -> Vec<Project> {
        self.projects.into_iter().map(Project::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_and_transform() {
        let body = r#"{"projects":[{"id":"1","image_url":"http://x/img.png","name":"Foo"}],"total":1}"#;
        let response: ProjectListResponse = serde_json::from_str(body).unwrap();
        let projects = response.into_projects();

        assert_eq!(
            projects,
            vec![Project {
                id: "1".to_string(),
                image_url: "http://x/img.png".to_string(),
                name: "Foo".to_string(),
            }]
        );
    }

    #[test]
    fn test_transform_keeps_order() {
        let response = ProjectListResponse {
            projects: ["c", "a", "b"]
                .iter()
                .map(|id| ProjectRecord {
                    id: id.to_string(),
                    image_url: format!("http://img/{id}.png"),
                    name: id.to_uppercase(),
                })
                .collect(),
        };
        let ids: Vec<String> = response.into_projects().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let response: ProjectListResponse = serde_json::from_str(r#"{"projects":[]}"#).unwrap();
        assert!(response.into_projects().is_empty());
    }

    #[test]
    fn test_missing_projects_field_is_error() {
        assert!(serde_json::from_str::<ProjectListResponse>(r#"{"items":[]}"#).is_err());
    }

    #[test]
    fn test_project_serializes_image_url_camel_case() {
        let project = Project {
            id: "7".to_string(),
            image_url: "http://x/7.png".to_string(),
            name: "Seven".to_string(),
        };
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["imageUrl"], "http://x/7.png");
        assert!(value.get("image_url").is_none());
    }
}
