//! One dashboard session: the first data source to render wins, the other is ignored.

use std::cell::Cell;
use std::fmt;
use std::future::Future;

use crate::api::{load_payload, DataSource, FetchError};
use crate::models::ChartPayload;

use super::Dashboard;


/// Where a session's data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// The deferred API fetch.
    Fetch,
    /// An externally delivered "data ready" payload.
    Signal,
}


impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "api"),
            Self::Signal => write!(f, "signal"),
        }
    }
}


/// Single-assignment flag deciding which data source owns the session.
#[derive(Debug, Default)]
pub struct RenderGate {
    winner: Cell<Option<DataOrigin>>,
}


impl RenderGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the session for `origin`. Only the first claim succeeds.
    pub fn claim(&self, origin: DataOrigin) -> bool {
        if self.winner.get().is_some() {
            return false;
        }
        self.winner.set(Some(origin));
        true
    }

    pub fn winner(&self) -> Option<DataOrigin> {
        self.winner.get()
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The dashboard was rendered from this source.
    Rendered(DataOrigin),
    /// The fetch failed and no signal rendered; the dashboard was left as it was.
    LoadFailed,
    /// Another source already owned the session.
    Ignored,
}


pub struct Session<'a> {
    dashboard: &'a mut Dashboard,
    gate: RenderGate,
}


impl<'a> Session<'a> {
    pub fn new(dashboard: &'a mut Dashboard) -> Self {
        Self {
            dashboard,
            gate: RenderGate::new(),
        }
    }

    pub fn winner(&self) -> Option<DataOrigin> {
        self.gate.winner()
    }

    /// Render from an externally delivered payload, unless the fetch already won.
    pub fn deliver_signal(&mut self, payload: &ChartPayload) -> SessionOutcome {
        if !self.gate.claim(DataOrigin::Signal) {
            log::info!("Ignoring data signal; session already served by {}", self.describe_winner());
            return SessionOutcome::Ignored;
        }
        self.dashboard.render_payload(payload);
        SessionOutcome::Rendered(DataOrigin::Signal)
    }

    /// Render from a fetch result, unless the signal already won.
    ///
    /// A failed fetch leaves the gate unclaimed so a later signal can still render.
    pub fn deliver_fetch(&mut self, result: Result<ChartPayload, FetchError>) -> SessionOutcome {
        if self.gate.winner().is_some() {
            log::info!("Ignoring fetched data; session already served by {}", self.describe_winner());
            return SessionOutcome::Ignored;
        }
        match result {
            Ok(payload) => {
                self.gate.claim(DataOrigin::Fetch);
                self.dashboard.render_payload(&payload);
                SessionOutcome::Rendered(DataOrigin::Fetch)
            }
            Err(e) => {
                log::error!("Failed to load chart data: {e}");
                SessionOutcome::LoadFailed
            }
        }
    }

    /// Race a deferred fetch from `source` against `signal`.
    ///
    /// A signal resolving to `None` means no payload will arrive, so the fetch
    /// decides. A failed fetch keeps waiting on an open signal; the session
    /// only reports `LoadFailed` once neither source can render.
    pub async fn run<S, F>(mut self, source: &S, signal: F) -> SessionOutcome
    where
        S: DataSource + ?Sized,
        F: Future<Output = Option<ChartPayload>>,
    {
        let fetch = async {
            tokio::task::yield_now().await;
            load_payload(source).await
        };
        tokio::pin!(fetch);
        tokio::pin!(signal);

        let mut signal_open = true;
        let mut fetch_failed = false;
        loop {
            tokio::select! {
                biased;

                payload = &mut signal, if signal_open => match payload {
                    Some(payload) => return self.deliver_signal(&payload),
                    None if fetch_failed => return SessionOutcome::LoadFailed,
                    None => signal_open = false,
                },
                result = &mut fetch, if !fetch_failed => match self.deliver_fetch(result) {
                    SessionOutcome::LoadFailed if signal_open => fetch_failed = true,
                    outcome => return outcome,
                },
                else => return SessionOutcome::LoadFailed,
            }
        }
    }

    fn describe_winner(&self) -> String {
        self.gate
            .winner()
            .map_or_else(|| "nothing".to_string(), |origin| origin.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LayoutConfig, BAR_MOUNT};
    use crate::models::{Category, Record};

    fn payload() -> ChartPayload {
        ChartPayload::new(vec![Category::new(1, "A")], vec![Record::new(1, 3.0, "X")])
    }

    #[test]
    fn test_gate_first_claim_wins() {
        let gate = RenderGate::new();
        assert_eq!(gate.winner(), None);
        assert!(gate.claim(DataOrigin::Signal));
        assert!(!gate.claim(DataOrigin::Fetch));
        assert!(!gate.claim(DataOrigin::Signal));
        assert_eq!(gate.winner(), Some(DataOrigin::Signal));
    }

    #[test]
    fn test_signal_then_fetch_is_ignored() {
        let mut dashboard = Dashboard::new(&LayoutConfig::default());
        let mut session = Session::new(&mut dashboard);

        assert_eq!(session.deliver_signal(&payload()), SessionOutcome::Rendered(DataOrigin::Signal));
        assert_eq!(session.deliver_fetch(Ok(ChartPayload::default())), SessionOutcome::Ignored);
        assert_eq!(session.winner(), Some(DataOrigin::Signal));

        assert_eq!(dashboard.render_count(), 1);
        assert!(dashboard.mount(BAR_MOUNT).unwrap().surface().is_some());
    }

    #[test]
    fn test_failed_fetch_leaves_gate_open_for_signal() {
        let mut dashboard = Dashboard::new(&LayoutConfig::default());
        let mut session = Session::new(&mut dashboard);

        let failure = FetchError::Status {
            url: "http://test/api/categories".to_string(),
            status: 500,
        };
        assert_eq!(session.deliver_fetch(Err(failure)), SessionOutcome::LoadFailed);
        assert_eq!(session.winner(), None);
        assert!(session.dashboard.mounts().iter().all(|m| m.is_blank()));

        assert_eq!(session.deliver_signal(&payload()), SessionOutcome::Rendered(DataOrigin::Signal));
        assert_eq!(session.winner(), Some(DataOrigin::Signal));

        assert_eq!(dashboard.render_count(), 1);
        assert!(dashboard.mount(BAR_MOUNT).unwrap().surface().is_some());
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(DataOrigin::Fetch.to_string(), "api");
        assert_eq!(DataOrigin::Signal.to_string(), "signal");
    }
}
