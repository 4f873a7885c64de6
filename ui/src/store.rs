//! Request state for the ranking page, driven by typed actions.
//!
//! Every fetch gets a [`RequestTicket`]; only the most recently issued ticket
//! may settle the state. Outcomes for superseded tickets are dropped, so a
//! slow response for an old date can never overwrite a newer one.
//!
//! On failure the previously loaded ranking is retained. The error panel hides
//! it, and the next successful fetch replaces it wholesale.

use std::cell::RefCell;
use std::rc::Rc;

use api::{FetchError, RankingResult, TargetDate};
use dioxus::prelude::{Signal, Writable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RankingAction {
    RequestStart {
        ticket: RequestTicket,
        target: TargetDate,
    },
    RequestSuccess {
        ticket: RequestTicket,
        result: RankingResult,
    },
    RequestFailure {
        ticket: RequestTicket,
        error: FetchError,
    },
}

impl RankingAction {
    fn ticket(&self) -> RequestTicket {
        match self {
            Self::RequestStart { ticket, .. }
            | Self::RequestSuccess { ticket, .. }
            | Self::RequestFailure { ticket, .. } => *ticket,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone)]
pub struct RankingStore {
    target_date: TargetDate,
    loading: bool,
    error: Option<FetchError>,
    data: Option<Rc<RankingResult>>,
    latest: u64,
}

impl RankingStore {
    pub fn new(target_date: TargetDate) -> Self {
        Self {
            target_date,
            loading: false,
            error: None,
            data: None,
            latest: 0,
        }
    }

    /// A store whose first fetch is about to be issued: reports loading from
    /// the very first render so the empty placeholders never flash.
    pub fn pending(target_date: TargetDate) -> Self {
        Self {
            loading: true,
            ..Self::new(target_date)
        }
    }

    pub fn target_date(&self) -> &TargetDate {
        &self.target_date
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn data(&self) -> Option<&Rc<RankingResult>> {
        self.data.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.data.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    /// Issues a fresh ticket and marks the store as loading for `target`.
    pub fn begin(&mut self, target: TargetDate) -> RequestTicket {
        let ticket = RequestTicket(self.latest + 1);
        self.apply(RankingAction::RequestStart { ticket, target });
        ticket
    }

    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<RankingResult, FetchError>,
    ) -> bool {
        match outcome {
            Ok(result) => self.apply(RankingAction::RequestSuccess { ticket, result }),
            Err(error) => self.apply(RankingAction::RequestFailure { ticket, error }),
        }
    }

    /// Returns `false` when the action belongs to a superseded request.
    pub fn apply(&mut self, action: RankingAction) -> bool {
        let ticket = action.ticket();
        let current = match action {
            RankingAction::RequestStart { .. } => ticket.0 > self.latest,
            _ => ticket.0 == self.latest,
        };
        if !current {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest,
                "discarding stale ranking action"
            );
            return false;
        }

        match action {
            RankingAction::RequestStart { ticket, target } => {
                self.latest = ticket.0;
                self.target_date = target;
                self.loading = true;
                self.error = None;
            }
            RankingAction::RequestSuccess { result, .. } => {
                self.data = Some(Rc::new(result));
                self.loading = false;
            }
            RankingAction::RequestFailure { error, .. } => {
                self.error = Some(error);
                self.loading = false;
            }
        }
        true
    }
}

/// Somewhere a [`RankingStore`] lives and can be mutated in place.
pub trait StoreHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut RankingStore) -> R) -> R;
}

impl StoreHandle for Signal<RankingStore> {
    fn update<R>(&mut self, f: impl FnOnce(&mut RankingStore) -> R) -> R {
        self.with_mut(f)
    }
}

impl StoreHandle for Rc<RefCell<RankingStore>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut RankingStore) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
