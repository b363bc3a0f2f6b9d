use serde::{Deserialize, Serialize};

/// Project categories offered by the showcase filter, in display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectCategory {
    #[default]
    All,
    Static,
    Responsive,
    Dynamic,
    React,
}

impl ProjectCategory {
    /// Code sent to the listing API as the `category` query value
    pub fn code(&self) -> &'static str {
        match self {
            ProjectCategory::All => "ALL",
            ProjectCategory::Static => "STATIC",
            ProjectCategory::Responsive => "RESPONSIVE",
            ProjectCategory::Dynamic => "DYNAMIC",
            ProjectCategory::React => "REACT",
        }
    }

    /// Label shown in the category selector
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectCategory::All => "All",
            ProjectCategory::Static => "Static",
            ProjectCategory::Responsive => "Responsive",
            ProjectCategory::Dynamic => "Dynamic",
            ProjectCategory::React => "React",
        }
    }

    /// All categories; the first one is the initial selection
    pub fn all() -> Vec<ProjectCategory> {
        vec![
            ProjectCategory::All,
            ProjectCategory::Static,
            ProjectCategory::Responsive,
            ProjectCategory::Dynamic,
            ProjectCategory::React,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ALL" => Some(ProjectCategory::All),
            "STATIC" => Some(ProjectCategory::Static),
            "RESPONSIVE" => Some(ProjectCategory::Responsive),
            "DYNAMIC" => Some(ProjectCategory::Dynamic),
            "REACT" => Some(ProjectCategory::React),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
