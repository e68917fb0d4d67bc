use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chartboard::api::{DataSource, FetchError};
use chartboard::config::{LayoutConfig, BAR_MOUNT, RADAR_MOUNT};
use chartboard::models::{Category, ChartPayload, Record};
use chartboard::orchestrator::{DataOrigin, Dashboard, Session, SessionOutcome};

/// In-memory source that counts requests.
struct FakeSource {
    categories: Vec<Category>,
    records: Vec<Record>,
    fail: bool,
    requests: AtomicUsize,
}

impl FakeSource {
    fn new(categories: Vec<Category>, records: Vec<Record>) -> Self {
        Self {
            categories,
            records,
            fail: false,
            requests: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new(), Vec::new())
        }
    }
}

#[async_trait]
impl DataSource for FakeSource {
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.categories.clone())
    }

    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FetchError::Status {
                url: "http://fake/api/records".to_string(),
                status: 500,
            });
        }
        Ok(self.records.clone())
    }
}

fn api_source() -> FakeSource {
    FakeSource::new(
        vec![Category::new(1, "From API")],
        vec![Record::new(1, 4.0, "X")],
    )
}

fn signal_payload() -> ChartPayload {
    ChartPayload::new(
        vec![Category::new(7, "From signal"), Category::new(8, "Second")],
        vec![Record::new(7, 2.0, "Y")],
    )
}

fn bar_text(dashboard: &Dashboard) -> String {
    dashboard
        .mount(BAR_MOUNT)
        .and_then(|m| m.surface())
        .map(|s| s.root.text_content())
        .unwrap_or_default()
}

#[tokio::test(flavor = "current_thread")]
async fn ready_signal_wins_over_deferred_fetch() {
    let mut dashboard = Dashboard::new(&LayoutConfig::default());
    let source = api_source();

    let outcome = Session::new(&mut dashboard)
        .run(&source, async { Some(signal_payload()) })
        .await;

    assert_eq!(outcome, SessionOutcome::Rendered(DataOrigin::Signal));
    assert_eq!(source.requests.load(Ordering::SeqCst), 0);
    assert_eq!(dashboard.render_count(), 1);
    assert!(bar_text(&dashboard).contains("From signal"));
}

#[tokio::test(flavor = "current_thread")]
async fn fetch_wins_when_no_signal_arrives() {
    let mut dashboard = Dashboard::new(&LayoutConfig::default());
    let source = api_source();

    let outcome = Session::new(&mut dashboard)
        .run(&source, std::future::pending())
        .await;

    assert_eq!(outcome, SessionOutcome::Rendered(DataOrigin::Fetch));
    assert_eq!(dashboard.render_count(), 1);
    assert!(bar_text(&dashboard).contains("From API"));
}

#[tokio::test(flavor = "current_thread")]
async fn closed_signal_leaves_the_fetch_to_decide() {
    let mut dashboard = Dashboard::new(&LayoutConfig::default());
    let source = api_source();

    let outcome = Session::new(&mut dashboard)
        .run(&source, async { None })
        .await;

    assert_eq!(outcome, SessionOutcome::Rendered(DataOrigin::Fetch));
    assert_eq!(source.requests.load(Ordering::SeqCst), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn late_signal_is_ignored_after_fetch() {
    let mut dashboard = Dashboard::new(&LayoutConfig::default());
    let source = api_source();

    let late_signal = async {
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        Some(signal_payload())
    };
    let outcome = Session::new(&mut dashboard).run(&source, late_signal).await;

    assert_eq!(outcome, SessionOutcome::Rendered(DataOrigin::Fetch));
    assert!(!bar_text(&dashboard).contains("From signal"));
}

#[tokio::test(flavor = "current_thread")]
async fn failed_fetch_keeps_previous_charts() {
    let mut dashboard = Dashboard::new(&LayoutConfig::default());
    dashboard.render_payload(&signal_payload());
    let before = dashboard.mount(RADAR_MOUNT).cloned();

    let outcome = Session::new(&mut dashboard)
        .run(&FakeSource::failing(), async { None })
        .await;

    assert_eq!(outcome, SessionOutcome::LoadFailed);
    assert_eq!(dashboard.render_count(), 1);
    assert_eq!(dashboard.mount(RADAR_MOUNT).cloned(), before);
    assert!(bar_text(&dashboard).contains("From signal"));
}

#[tokio::test(flavor = "current_thread")]
async fn signal_after_failed_fetch_still_renders() {
    let mut dashboard = Dashboard::new(&LayoutConfig::default());
    let source = FakeSource::failing();

    let delayed_signal = async {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        Some(signal_payload())
    };
    let outcome = Session::new(&mut dashboard)
        .run(&source, delayed_signal)
        .await;

    assert_eq!(outcome, SessionOutcome::Rendered(DataOrigin::Signal));
    assert_eq!(source.requests.load(Ordering::SeqCst), 2);
    assert_eq!(dashboard.render_count(), 1);
    assert!(bar_text(&dashboard).contains("From signal"));
}
