use crate::features::ruc::models::TaxpayerRecord;
use crate::shared::constants::{MSG_FORM_INVALID_RUC, MSG_FORM_TRANSPORT_FAILED};
use crate::shared::validation::{is_complete_ruc, sanitize_ruc_input};

/// What the lookup form is currently showing.
///
/// Exactly one of these holds at a time, so a form cannot be loading and
/// showing an error at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// No search has been made yet
    Idle,
    /// A lookup is in flight
    Loading { token: u64 },
    /// The last submission failed
    Error { message: String },
    /// The last submission succeeded
    Result { record: TaxpayerRecord },
}

impl FormState {
    pub fn name(&self) -> &'static str {
        match self {
            FormState::Idle => "idle",
            FormState::Loading { .. } => "loading",
            FormState::Error { .. } => "error",
            FormState::Result { .. } => "result",
        }
    }
}

/// A lookup the form wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub token: u64,
    pub ruc: String,
}

/// How a lookup ended, as seen by the form
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    /// The proxy returned registry data
    Found(TaxpayerRecord),
    /// The proxy answered with an error message
    Rejected(String),
    /// The proxy could not be reached or its answer could not be read.
    /// Only the page script reaches the proxy over the network; the server-side
    /// render calls the service directly and never produces this outcome.
    #[allow(dead_code)]
    TransportFailed,
}

/// Lookup form: sanitized candidate RUC plus the current [`FormState`].
///
/// Every submission carries a token; only the outcome for the latest token is
/// applied, so a slow response can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct LookupForm {
    candidate: String,
    state: FormState,
    latest_token: u64,
}

impl LookupForm {
    pub fn new() -> Self {
        Self {
            candidate: String::new(),
            state: FormState::Idle,
            latest_token: 0,
        }
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FormState::Loading { .. })
    }

    /// Store a keystroke's worth of input. Typing clears a visible error.
    pub fn input(&mut self, raw: &str) {
        self.candidate = sanitize_ruc_input(raw);
        if matches!(self.state, FormState::Error { .. }) {
            self.state = FormState::Idle;
        }
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && is_complete_ruc(&self.candidate)
    }

    /// Start a lookup for the current candidate.
    ///
    /// Returns `None` and moves to `Error` when the candidate is not 11 digits.
    /// Otherwise the previous error or result is cleared and the form waits on
    /// the returned submission.
    pub fn submit(&mut self) -> Option<Submission> {
        if !is_complete_ruc(&self.candidate) {
            self.state = FormState::Error {
                message: MSG_FORM_INVALID_RUC.to_string(),
            };
            return None;
        }

        self.latest_token += 1;
        self.state = FormState::Loading {
            token: self.latest_token,
        };

        Some(Submission {
            token: self.latest_token,
            ruc: self.candidate.clone(),
        })
    }

    /// Apply the outcome of a submission. Returns false if it was stale.
    pub fn resolve(&mut self, token: u64, outcome: LookupOutcome) -> bool {
        if token != self.latest_token || !self.is_loading() {
            tracing::debug!(
                "Discarding stale lookup outcome: token={}, latest={}",
                token,
                self.latest_token
            );
            return false;
        }

        self.state = match outcome {
            LookupOutcome::Found(record) => FormState::Result { record },
            LookupOutcome::Rejected(message) => FormState::Error { message },
            LookupOutcome::TransportFailed => FormState::Error {
                message: MSG_FORM_TRANSPORT_FAILED.to_string(),
            },
        };
        true
    }
}

impl Default for LookupForm {
    fn default() -> Self {
        Self::new()
    }
}
