//! Fetch state machine for the project showcase.
//!
//! Every fetch is tagged with a sequence number. Only the completion of the
//! latest fetch is applied; earlier ones are dropped when they resolve.

use crate::domain::a001_project::api::FetchError;
use contracts::domain::a001_project::aggregate::Project;
use contracts::enums::project_category::ProjectCategory;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ApiStatus {
    /// Before the first fetch starts
    #[default]
    Initial,
    InProgress,
    Success(Vec<Project>),
    Failure,
}

/// Identifies one outbound listing request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    category: ProjectCategory,
}

impl RequestTicket {
    pub fn category(&self) -> ProjectCategory {
        self.category
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowcaseState {
    active_category: ProjectCategory,
    status: ApiStatus,
    latest_seq: u64,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> ProjectCategory {
        self.active_category
    }

    pub fn status(&self) -> &ApiStatus {
        &self.status
    }

    /// Switch category and start a fetch for it.
    ///
    /// Reselecting the active category fetches again.
    pub fn select_category(&mut self, category: ProjectCategory) -> RequestTicket {
        self.active_category = category;
        self.begin_fetch()
    }

    /// Enter `InProgress` and issue a ticket for the active category
    pub fn begin_fetch(&mut self) -> RequestTicket {
        self.latest_seq += 1;
        self.status = ApiStatus::InProgress;
        RequestTicket {
            seq: self.latest_seq,
            category: self.active_category,
        }
    }

    pub fn retry(&mut self) -> RequestTicket {
        self.begin_fetch()
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns `false` (state untouched) when a newer fetch was started after
    /// `ticket` was issued.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<Project>, FetchError>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            log::debug!(
                "Dropping stale response #{} for {} (latest is #{})",
                ticket.seq,
                ticket.category,
                self.latest_seq
            );
            return false;
        }

        self.status = match outcome {
            Ok(projects) => ApiStatus::Success(projects),
            Err(e) => {
                log::error!("Failed to load {} projects: {}", ticket.category, e);
                ApiStatus::Failure
            }
        };
        true
    }
}

/// What the content area shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseView<'a> {
    Empty,
    Loading,
    Projects(&'a [Project]),
    Failure,
}

pub fn select_view(status: &ApiStatus) -> ShowcaseView<'_> {
    match status {
        ApiStatus::Initial => ShowcaseView::Empty,
        ApiStatus::InProgress => ShowcaseView::Loading,
        ApiStatus::Success(projects) => ShowcaseView::Projects(projects),
        ApiStatus::Failure => ShowcaseView::Failure,
    }
}
