use leptos::prelude::*;

const LOGO_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/projects-showcase/website-logo-img.png";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav data-zone="header" class="nav-container">
            <img class="nav-image" src=LOGO_URL alt="website logo" />
        </nav>
    }
}
