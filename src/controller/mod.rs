// src/controller/mod.rs
//
// The page's request/response lifecycle as one state machine.
//
//   Idle ──submit──▶ Submitting ──ok──▶ Succeeded ──back──▶ Idle
//                      │    ▲
//                     err   └──submit── Failed
//                      ▼
//                    Failed
//
// `submit` is ignored while a request is in flight or a result is shown.
// Completion is applied by whoever runs the request (GUI worker or CLI).

mod inflight;
mod session;

pub use inflight::InFlight;
pub use session::{ChangelogOverlay, Session};

use crate::core::{KeywordQuery, Locale, RequestError, RequestPayload, ResultPayload, Transport};

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded(ResultPayload),
    Failed,
}

/// Payload-free view of `Phase`, handy for logs and assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle => PhaseKind::Idle,
            Phase::Submitting => PhaseKind::Submitting,
            Phase::Succeeded(_) => PhaseKind::Succeeded,
            Phase::Failed => PhaseKind::Failed,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PageController {
    phase: Phase,
    /// Raw text of the keyword field.
    input: String,
    /// Keywords of the last submission; empty until the first submit.
    query: KeywordQuery,
}

impl Default for PageController {
    fn default() -> Self {
        Self { phase: Phase::Idle, input: s!(), query: KeywordQuery::default() }
    }
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    /* ---------- queries ---------- */

    #[inline]
    pub fn phase(&self) -> &Phase { &self.phase }

    #[inline]
    pub fn kind(&self) -> PhaseKind { self.phase.kind() }

    #[inline]
    pub fn input(&self) -> &str { &self.input }

    #[inline]
    pub fn query(&self) -> &KeywordQuery { &self.query }

    #[inline]
    pub fn is_submitting(&self) -> bool { matches!(self.phase, Phase::Submitting) }

    #[inline]
    pub fn can_submit(&self) -> bool { matches!(self.phase, Phase::Idle | Phase::Failed) }

    pub fn result(&self) -> Option<&ResultPayload> {
        match &self.phase {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    #[inline]
    pub fn has_result(&self) -> bool { self.result().is_some() }

    /* ---------- input ---------- */

    /// Mutable handle for the text field. Edits are allowed in every phase.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.input = raw.into();
    }

    /* ---------- transitions ---------- */

    /// Idle/Failed → Submitting. Returns the payload for the single outbound
    /// call, or `None` if the trigger is currently inert.
    pub fn submit(&mut self, locale: Locale) -> Option<RequestPayload> {
        if !self.can_submit() {
            logd!("Submit: ignored in {:?}", self.kind());
            return None;
        }

        let query = KeywordQuery::parse(&self.input);
        if query.is_blank() {
            logd!("Submit: sending blank keywords {:?}", query.as_slice());
        }
        let payload = RequestPayload::new(query.clone(), locale);
        self.query = query;
        self.phase = Phase::Submitting;

        logf!("Submit: Begin keywords={} lang={}", payload.keywords.len(), payload.lang);
        Some(payload)
    }

    /// Submitting → Succeeded | Failed, or back to Idle for a `null` body.
    /// Outcomes arriving in any other phase
    /// are dropped. Returns whether a transition happened.
    pub fn complete(&mut self, outcome: Result<ResultPayload, RequestError>) -> bool {
        if !self.is_submitting() {
            logd!("Submit: stray completion in {:?} dropped", self.kind());
            return false;
        }

        match outcome {
            // A `null` body means "no result": stay on the input view as typed.
            Ok(result) if result.raw().is_null() => {
                logf!("Submit: OK but body was null, staying on input");
                self.phase = Phase::Idle;
            }
            Ok(result) => {
                logf!("Submit: OK groups={} links={}", result.groups().len(), result.link_count());
                self.input.clear();
                self.phase = Phase::Succeeded(result);
            }
            Err(e) => {
                loge!("Submit: Error during fetch: {}", e);
                self.phase = Phase::Failed;
            }
        }
        true
    }

    /// Succeeded → Idle, forgetting the result and the keywords.
    pub fn back(&mut self) -> bool {
        if !self.has_result() {
            logd!("Back: ignored in {:?}", self.kind());
            return false;
        }
        self.phase = Phase::Idle;
        self.input.clear();
        self.query = KeywordQuery::default();
        logf!("Back: result cleared");
        true
    }

    /// Submit and run the call on the current thread.
    pub fn submit_blocking(&mut self, locale: Locale, transport: &dyn Transport) -> bool {
        let Some(payload) = self.submit(locale) else { return false };
        let outcome = transport.post_keywords(&payload);
        self.complete(outcome)
    }
}
