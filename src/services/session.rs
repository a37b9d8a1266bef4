//! Request lifecycle tracking and the page-session aggregate.
//!
//! Every client operation runs through a [`RequestSlot`], which tags each
//! attempt with a monotonic sequence number. A completion carrying anything
//! older than the latest issued sequence is dropped, so when two requests
//! overlap the display state always reflects the newest one.

use crate::backend::{Backend, BackendError, LogoResult, OrderPayload, OrderResult, RosterImportResult};
use crate::cli::PaymentMethod;
use crate::domain::models::{BuyerDetails, DesignState};
use crate::services::roster::RosterFile;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequestState<T> {
    Idle,
    Pending { seq: u64 },
    Success { seq: u64, value: T },
    Failed { seq: u64, error: String },
}

#[derive(Debug, Clone)]
pub struct RequestSlot<T> {
    state: RequestState<T>,
    issued: u64,
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self {
            state: RequestState::Idle,
            issued: 0,
        }
    }
}

impl<T> RequestSlot<T> {
    /// Issues a new sequence token and marks the slot pending.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.state = RequestState::Pending { seq: self.issued };
        self.issued
    }

    /// Applies a completion. Returns false (and leaves the slot untouched)
    /// when a newer request was issued after `seq`.
    pub fn complete<E: fmt::Display>(&mut self, seq: u64, result: Result<T, E>) -> bool {
        if seq != self.issued {
            return false;
        }
        self.state = match result {
            Ok(value) => RequestState::Success { seq, value },
            Err(err) => RequestState::Failed {
                seq,
                error: err.to_string(),
            },
        };
        true
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn latest_success(&self) -> Option<&T> {
        match &self.state {
            RequestState::Success { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// One storefront session: the design selection plus the outcome slot of
/// each client component. Each action validates its input, issues exactly
/// one backend request, and stores the tagged result.
#[derive(Debug, Default)]
pub struct Studio {
    pub design: DesignState,
    roster: RequestSlot<RosterImportResult>,
    logo: RequestSlot<LogoResult>,
    order: RequestSlot<OrderResult>,
}

impl Studio {
    pub fn import_roster(
        &mut self,
        backend: &Backend,
        roster: &RosterFile,
        team_name: &str,
        sport: &str,
    ) -> &RequestState<RosterImportResult> {
        let seq = self.roster.begin();
        let result = backend.import_roster(team_name, sport, &roster.file_name, roster.bytes.clone());
        self.roster.complete(seq, result);
        self.roster.state()
    }

    /// Rejects blank prompts before any request is issued. The prompt is
    /// sent exactly as given.
    pub fn generate_logo(
        &mut self,
        backend: &Backend,
        prompt: &str,
    ) -> anyhow::Result<&RequestState<LogoResult>> {
        if prompt.trim().is_empty() {
            anyhow::bail!("logo prompt must not be empty");
        }
        let seq = self.logo.begin();
        let result = backend.generate_logo(prompt);
        self.logo.complete(seq, result);
        Ok(self.logo.state())
    }

    pub fn place_order(
        &mut self,
        backend: &Backend,
        buyer: &BuyerDetails,
        method: PaymentMethod,
        team_id: Option<String>,
        template_id: Option<String>,
        logo: Option<&LogoResult>,
    ) -> &RequestState<OrderResult> {
        let payload = self.assemble_order(buyer, method, team_id, template_id, logo);
        let seq = self.order.begin();
        let result: Result<OrderResult, BackendError> = backend.place_order(&payload);
        self.order.complete(seq, result);
        self.order.state()
    }

    /// Builds the checkout payload without posting it. An explicitly passed
    /// logo wins over one generated earlier in this session.
    pub fn assemble_order(
        &self,
        buyer: &BuyerDetails,
        method: PaymentMethod,
        team_id: Option<String>,
        template_id: Option<String>,
        logo: Option<&LogoResult>,
    ) -> OrderPayload {
        OrderPayload::assemble(
            &self.design,
            buyer,
            method,
            team_id,
            template_id,
            logo.or_else(|| self.logo.latest_success()),
        )
    }

    pub fn latest_logo(&self) -> Option<&LogoResult> {
        self.logo.latest_success()
    }
}
