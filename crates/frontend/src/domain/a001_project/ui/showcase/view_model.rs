use super::state::{RequestTicket, ShowcaseState};
use crate::domain::a001_project::api::{self, ProjectSource};
use crate::shared::api_utils::ShowcaseConfig;
use contracts::enums::project_category::ProjectCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// ViewModel for the project showcase
#[derive(Clone, Copy)]
pub struct ShowcaseViewModel {
    pub state: RwSignal<ShowcaseState>,
    config: StoredValue<ShowcaseConfig>,
    source: StoredValue<Rc<dyn ProjectSource>, LocalStorage>,
}

impl ShowcaseViewModel {
    pub fn new(config: ShowcaseConfig, source: Rc<dyn ProjectSource>) -> Self {
        Self {
            state: RwSignal::new(ShowcaseState::new()),
            config: StoredValue::new(config),
            source: StoredValue::new_local(source),
        }
    }

    pub fn fetch_projects(&self) {
        if let Some(ticket) = self.state.try_update(|s| s.begin_fetch()) {
            self.dispatch(ticket);
        }
    }

    pub fn select_category(&self, category: ProjectCategory) {
        if let Some(ticket) = self.state.try_update(|s| s.select_category(category)) {
            self.dispatch(ticket);
        }
    }

    pub fn retry(&self) {
        if let Some(ticket) = self.state.try_update(|s| s.retry()) {
            self.dispatch(ticket);
        }
    }

    fn dispatch(&self, ticket: RequestTicket) {
        let Some(url) = self
            .config
            .try_with_value(|c| c.projects_url(ticket.category()))
        else {
            return;
        };
        let Some(source) = self.source.try_get_value() else {
            return;
        };
        let state = self.state;

        spawn_local(async move {
            let outcome = api::load_projects(source.as_ref(), &url).await;
            // Signal is gone once the showcase is unmounted
            let _ = state.try_update(|s| s.complete(ticket, outcome));
        });
    }
}
