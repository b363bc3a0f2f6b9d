pub mod project_category;
