use crate::domain::a001_project::ui::showcase::ProjectsShowcase;
use crate::shared::api_utils::ShowcaseConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Endpoint template for the showcase, overridable via `?endpoint=...`
    let config = ShowcaseConfig::from_location();
    log::info!("Projects endpoint template: {}", config.endpoint_template);
    provide_context(config);

    view! {
        <ConfigProvider>
            <ProjectsShowcase />
        </ConfigProvider>
    }
}
