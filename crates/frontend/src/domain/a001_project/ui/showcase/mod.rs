pub mod state;
pub mod view_model;

use self::state::{select_view, ShowcaseView};
use self::view_model::ShowcaseViewModel;
use crate::domain::a001_project::api::HttpProjectSource;
use crate::layout::header::Header;
use crate::shared::api_utils::ShowcaseConfig;
use crate::shared::components::ui::button::Button;
use crate::shared::components::ui::select::Select;
use contracts::domain::a001_project::aggregate::Project;
use contracts::enums::project_category::ProjectCategory;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::Spinner;

const FAILURE_IMAGE_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/projects-showcase/failure-img.png";
const FAILURE_IMAGE_ALT: &str = "failure view";
const FAILURE_HEADING: &str = "Oops! Something Went Wrong";
const FAILURE_MESSAGE: &str = "We cannot seem to find the page you are looking for";
const RETRY_LABEL: &str = "Retry";

/// One entry of the success list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub key: String,
    pub image_src: String,
    pub image_alt: String,
    pub name: String,
}

impl From<&Project> for ProjectCard {
    fn from(p: &Project) -> Self {
        Self {
            key: p.id.clone(),
            image_src: p.image_url.clone(),
            image_alt: p.name.clone(),
            name: p.name.clone(),
        }
    }
}

pub fn project_cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects.iter().map(ProjectCard::from).collect()
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectsShowcase() -> impl IntoView {
    let config = use_context::<ShowcaseConfig>().unwrap_or_default();
    let vm = ShowcaseViewModel::new(config, Rc::new(HttpProjectSource));

    let options: Vec<(String, String)> = ProjectCategory::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.display_name().to_string()))
        .collect();
    let active_code = Signal::derive(move || vm.state.with(|s| s.active_category().code().to_string()));

    let on_category_change = Callback::new(move |code: String| {
        match ProjectCategory::from_code(&code) {
            Some(category) => vm.select_category(category),
            None => log::warn!("Unknown project category: {}", code),
        }
    });

    vm.fetch_projects();

    view! {
        <div class="app-container">
            <Header />
            <div class="list-container">
                <Select
                    id="categorySelector"
                    class="select-class"
                    value=active_code
                    options=options
                    on_change=on_category_change
                />
                {move || vm.state.with(|s| match select_view(s.status()) {
                    ShowcaseView::Empty => ().into_any(),
                    ShowcaseView::Loading => loading_view().into_any(),
                    ShowcaseView::Projects(projects) => projects_view(project_cards(projects)).into_any(),
                    ShowcaseView::Failure => failure_view(vm).into_any(),
                })}
            </div>
        </div>
    }
}

fn loading_view() -> impl IntoView {
    view! {
        <div class="loader-container" data-testid="loader">
            <Spinner />
        </div>
    }
}

fn projects_view(cards: Vec<ProjectCard>) -> impl IntoView {
    view! {
        <ul class="ul-card">
            <For
                each=move || cards.clone()
                key=|card| card.key.clone()
                children=|card| view! {
                    <li class="li-card">
                        <img class="image" src=card.image_src alt=card.image_alt />
                        <p class="heading">{card.name}</p>
                    </li>
                }
            />
        </ul>
    }
}

fn failure_view(vm: ShowcaseViewModel) -> impl IntoView {
    view! {
        <div class="card">
            <img class="image" src=FAILURE_IMAGE_URL alt=FAILURE_IMAGE_ALT />
            <h1>{FAILURE_HEADING}</h1>
            <p>{FAILURE_MESSAGE}</p>
            <Button class="retry-button" on_click=Callback::new(move |_| vm.retry())>
                {RETRY_LABEL}
            </Button>
        </div>
    }
}
