//! The fetch/display state machine behind the country list.
//!
//! [`Explorer`] is the single owner of search text, filter state, the
//! one-time snapshot, and the current result set; a rendering layer reads
//! it and mutates it only through the operations here.
//!
//! The display cycle is `Idle → Loading → Results | Empty | Failed`, back
//! to `Loading` on the next triggering input. `Empty` and `Failed` both
//! render "no results", but they arm the notice machinery differently: one
//! [`Notice`] fires per consecutive failure streak, and any non-empty
//! success re-arms it.
//!
//! Overlapping fetches are sequenced with a monotonically increasing
//! request token: every [`begin_search`](Explorer::begin_search) issues a
//! new [`Ticket`], and [`complete_search`](Explorer::complete_search)
//! applies a result only when its ticket is still the latest. A superseded
//! response is dropped instead of overwriting fresher data.

use std::future::Future;

use tracing::{debug, warn};

use crate::{
    error::Result,
    filter::{self, FilterState},
    model::CountryRecord,
};

/// Where country records come from. [`RestCountriesClient`] is the real
/// implementation; tests substitute in-memory stubs.
///
/// [`RestCountriesClient`]: crate::client::RestCountriesClient
pub trait CountrySource: Send + Sync {
    /// The full unfiltered collection.
    fn all(&self) -> impl Future<Output = Result<Vec<CountryRecord>>> + Send;

    /// Records matching a name lookup. A miss is an error, not an empty
    /// list.
    fn by_name(&self, text: &str) -> impl Future<Output = Result<Vec<CountryRecord>>> + Send;
}

/// Rendering states of the fetch/display cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing fetched yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Last fetch succeeded with at least one record after filtering.
    Results,
    /// Last fetch succeeded but filters eliminated everything.
    Empty,
    /// Last fetch failed (network error or name-lookup miss).
    Failed,
}

/// User-visible, one-shot notifications. The rendering layer turns these
/// into toasts; the explorer decides when one fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Manual search submitted with a blank query.
    EmptyQuery,
    /// Fetch succeeded, zero records after filtering.
    NoResults,
    /// Fetch failed outright (network error or lookup miss).
    LookupFailed,
}

/// What a fetch should do: decided at `begin_search` from the query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// Full-collection fetch (blank query).
    All,
    /// Exact-name lookup with the trimmed query.
    ByName(String),
}

/// Handle for one in-flight fetch; carries the request token that decides
/// whether its completion still wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    token: u64,
    /// The fetch this ticket was issued for.
    pub plan: FetchPlan,
}

/// Outcome of completing (or rejecting) a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Whether this completion updated the explorer (stale tickets and
    /// rejected submissions do not).
    pub applied: bool,
    /// At most one notice to surface to the user.
    pub notice: Option<Notice>,
}

impl Completion {
    fn skipped() -> Self {
        Self {
            applied: false,
            notice: None,
        }
    }
}

/// State container for the country data view.
#[derive(Debug)]
pub struct Explorer {
    results: Vec<CountryRecord>,
    filters: FilterState,
    snapshot: Vec<CountryRecord>,
    phase: Phase,
    loading: bool,
    // One flag covers both failure kinds: once a notice has fired for the
    // current streak, further failures stay quiet until a non-empty
    // success re-arms it.
    notice_shown: bool,
    next_token: u64,
    latest_token: u64,
}

impl Default for Explorer {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            filters: FilterState::default(),
            snapshot: Vec::new(),
            phase: Phase::Idle,
            loading: false,
            notice_shown: false,
            next_token: 0,
            latest_token: 0,
        }
    }
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current (filtered) result set.
    pub fn results(&self) -> &[CountryRecord] {
        &self.results
    }

    /// Current search inputs.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Where the display cycle stands.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Continent options derived from the snapshot and the region filter.
    /// Recomputed on every call; the snapshot itself is the only cache.
    pub fn continent_options(&self) -> Vec<String> {
        filter::continent_options(&self.snapshot, self.filters.region())
    }

    /// Region options derived from the snapshot and the continent filter.
    pub fn region_options(&self) -> Vec<String> {
        filter::region_options(&self.snapshot, self.filters.continent())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    pub fn set_continent(&mut self, continent: Option<String>) {
        self.filters.continent = continent.filter(|c| !c.is_empty());
    }

    pub fn set_region(&mut self, region: Option<String>) {
        self.filters.region = region.filter(|r| !r.is_empty());
    }

    /// One-time fetch of the unfiltered snapshot the option lists derive
    /// from. A failure is logged and leaves the options empty; it never
    /// surfaces a notice and is never retried.
    pub async fn load_snapshot<S: CountrySource>(&mut self, source: &S) {
        match source.all().await {
            Ok(records) => {
                debug!(count = records.len(), "snapshot loaded");
                self.snapshot = records;
            }
            Err(err) => warn!("failed to load country snapshot: {err}"),
        }
    }

    /// Automatic search: runs on mount and on every query/filter change.
    /// Blank queries fall back to the full-collection fetch.
    pub async fn search<S: CountrySource>(&mut self, source: &S) -> Completion {
        let ticket = self.begin_search();
        let fetched = match &ticket.plan {
            FetchPlan::All => source.all().await,
            FetchPlan::ByName(name) => source.by_name(name).await,
        };
        self.complete_search(ticket, fetched)
    }

    /// Manual search trigger. Unlike [`search`](Self::search), a blank
    /// query is rejected with a validation notice before any network call.
    pub async fn submit<S: CountrySource>(&mut self, source: &S) -> Completion {
        if self.filters.query.trim().is_empty() {
            return Completion {
                applied: false,
                notice: Some(Notice::EmptyQuery),
            };
        }
        self.search(source).await
    }

    /// Issues a ticket for a new fetch and moves the view into `Loading`.
    ///
    /// Event-driven callers that run the fetch themselves pair this with
    /// [`complete_search`](Self::complete_search); `search` is the
    /// single-call convenience over both.
    pub fn begin_search(&mut self) -> Ticket {
        self.next_token += 1;
        self.latest_token = self.next_token;
        self.loading = true;
        self.phase = Phase::Loading;

        let trimmed = self.filters.query.trim();
        let plan = if trimmed.is_empty() {
            FetchPlan::All
        } else {
            FetchPlan::ByName(trimmed.to_string())
        };

        Ticket {
            token: self.next_token,
            plan,
        }
    }

    /// Applies a fetch result, filtering client-side, unless a newer ticket
    /// has been issued since — stale completions are dropped untouched.
    pub fn complete_search(
        &mut self,
        ticket: Ticket,
        fetched: Result<Vec<CountryRecord>>,
    ) -> Completion {
        if ticket.token != self.latest_token {
            debug!(
                token = ticket.token,
                latest = self.latest_token,
                "dropping superseded fetch result"
            );
            return Completion::skipped();
        }

        self.loading = false;

        match fetched {
            Ok(records) => {
                let filtered = filter::apply(records, &self.filters);
                if filtered.is_empty() {
                    self.results = filtered;
                    self.phase = Phase::Empty;
                    Completion {
                        applied: true,
                        notice: self.fire(Notice::NoResults),
                    }
                } else {
                    self.results = filtered;
                    self.phase = Phase::Results;
                    self.notice_shown = false;
                    Completion {
                        applied: true,
                        notice: None,
                    }
                }
            }
            Err(err) => {
                warn!("fetch failed: {err}");
                self.results.clear();
                self.phase = Phase::Failed;
                Completion {
                    applied: true,
                    notice: self.fire(Notice::LookupFailed),
                }
            }
        }
    }

    fn fire(&mut self, notice: Notice) -> Option<Notice> {
        if self.notice_shown {
            None
        } else {
            self.notice_shown = true;
            Some(notice)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::{error::CountryDataError, filter::tests::rec};

    /// Scripted source: pops one canned response per call and counts calls.
    struct Script {
        responses: Mutex<Vec<Result<Vec<CountryRecord>>>>,
        calls: AtomicUsize,
    }

    impl Script {
        fn new(mut responses: Vec<Result<Vec<CountryRecord>>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn pop(&self) -> Result<Vec<CountryRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop()
                .expect("script exhausted")
        }
    }

    impl CountrySource for Script {
        async fn all(&self) -> Result<Vec<CountryRecord>> {
            self.pop()
        }

        async fn by_name(&self, _text: &str) -> Result<Vec<CountryRecord>> {
            self.pop()
        }
    }

    fn miss() -> CountryDataError {
        CountryDataError::NotFound {
            url: "http://test/v3.1/name/xyz".into(),
        }
    }

    fn some_countries() -> Vec<CountryRecord> {
        vec![
            rec("France", "Europe", &["Europe"]),
            rec("Japan", "Asia", &["Asia"]),
        ]
    }

    #[tokio::test]
    async fn blank_manual_submit_never_touches_the_network() {
        let source = Script::new(vec![]);
        let mut explorer = Explorer::new();
        explorer.set_query("   ");

        let done = explorer.submit(&source).await;

        assert_eq!(done.notice, Some(Notice::EmptyQuery));
        assert!(!done.applied);
        assert_eq!(source.calls(), 0);
        assert_eq!(explorer.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn blank_automatic_search_fetches_the_full_collection() {
        let source = Script::new(vec![Ok(some_countries())]);
        let mut explorer = Explorer::new();

        let done = explorer.search(&source).await;

        assert!(done.applied);
        assert_eq!(done.notice, None);
        assert_eq!(explorer.phase(), Phase::Results);
        assert_eq!(explorer.results().len(), 2);
        assert!(!explorer.is_loading());
    }

    #[tokio::test]
    async fn filters_are_applied_after_the_fetch() {
        let source = Script::new(vec![Ok(some_countries())]);
        let mut explorer = Explorer::new();
        explorer.set_region(Some("Asia".into()));

        explorer.search(&source).await;

        assert_eq!(explorer.results().len(), 1);
        assert_eq!(explorer.results()[0].display_key(), "Japan");
    }

    #[tokio::test]
    async fn empty_streak_warns_exactly_once() {
        let source = Script::new(vec![
            Ok(some_countries()),
            Ok(some_countries()),
            Ok(some_countries()),
        ]);
        let mut explorer = Explorer::new();
        // A region no record matches: every fetch succeeds but filters
        // eliminate everything.
        explorer.set_region(Some("Atlantis".into()));

        let first = explorer.search(&source).await;
        let second = explorer.search(&source).await;
        let third = explorer.search(&source).await;

        assert_eq!(first.notice, Some(Notice::NoResults));
        assert_eq!(second.notice, None);
        assert_eq!(third.notice, None);
        assert_eq!(explorer.phase(), Phase::Empty);
    }

    #[tokio::test]
    async fn failure_streak_warns_once_and_success_rearms() {
        let source = Script::new(vec![
            Err(miss()),
            Err(miss()),
            Ok(some_countries()),
            Err(miss()),
        ]);
        let mut explorer = Explorer::new();
        explorer.set_query("xyz");

        assert_eq!(
            explorer.search(&source).await.notice,
            Some(Notice::LookupFailed)
        );
        assert_eq!(explorer.results().len(), 0);
        assert_eq!(explorer.phase(), Phase::Failed);

        // Second failure of the same streak: suppressed.
        assert_eq!(explorer.search(&source).await.notice, None);

        // Non-empty success re-arms the notice...
        explorer.set_query("france");
        assert_eq!(explorer.search(&source).await.notice, None);
        assert_eq!(explorer.phase(), Phase::Results);

        // ...so the next failure fires again.
        explorer.set_query("xyz");
        assert_eq!(
            explorer.search(&source).await.notice,
            Some(Notice::LookupFailed)
        );
    }

    #[tokio::test]
    async fn empty_and_failure_share_one_suppression_streak() {
        let source = Script::new(vec![Ok(some_countries()), Err(miss())]);
        let mut explorer = Explorer::new();
        explorer.set_region(Some("Atlantis".into()));

        let first = explorer.search(&source).await;
        assert_eq!(first.notice, Some(Notice::NoResults));

        // A failure right after an empty result is the same streak: quiet.
        let second = explorer.search(&source).await;
        assert_eq!(second.notice, None);
    }

    #[test]
    fn stale_ticket_completion_is_dropped() {
        let mut explorer = Explorer::new();

        let stale = explorer.begin_search();
        let fresh = explorer.begin_search();

        // The older fetch resolves last; its records must not win.
        let fresh_done =
            explorer.complete_search(fresh, Ok(vec![rec("Japan", "Asia", &["Asia"])]));
        assert!(fresh_done.applied);
        assert_eq!(explorer.results()[0].display_key(), "Japan");

        let stale_done =
            explorer.complete_search(stale, Ok(vec![rec("France", "Europe", &["Europe"])]));
        assert!(!stale_done.applied);
        assert_eq!(stale_done.notice, None);
        assert_eq!(explorer.results()[0].display_key(), "Japan");
        assert!(!explorer.is_loading());
    }

    #[test]
    fn begin_search_plans_by_trimmed_query() {
        let mut explorer = Explorer::new();

        assert_eq!(explorer.begin_search().plan, FetchPlan::All);
        assert!(explorer.is_loading());
        assert_eq!(explorer.phase(), Phase::Loading);

        explorer.set_query("  France ");
        assert_eq!(
            explorer.begin_search().plan,
            FetchPlan::ByName("France".into())
        );
    }

    #[tokio::test]
    async fn snapshot_failure_is_quiet_and_leaves_options_empty() {
        let source = Script::new(vec![Err(miss())]);
        let mut explorer = Explorer::new();

        explorer.load_snapshot(&source).await;

        assert!(explorer.continent_options().is_empty());
        assert!(explorer.region_options().is_empty());
        assert_eq!(explorer.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn option_lists_follow_the_opposite_filter() {
        let source = Script::new(vec![Ok(vec![
            rec("France", "Europe", &["Europe"]),
            rec("Turkey", "Asia", &["Europe", "Asia"]),
            rec("Japan", "Asia", &["Asia"]),
        ])]);
        let mut explorer = Explorer::new();
        explorer.load_snapshot(&source).await;

        explorer.set_region(Some("Asia".into()));
        assert_eq!(explorer.continent_options(), ["Europe", "Asia"]);
        // The region list ignores the region filter itself.
        assert_eq!(explorer.region_options(), ["Europe", "Asia"]);

        explorer.set_region(None);
        explorer.set_continent(Some("Europe".into()));
        assert_eq!(explorer.region_options(), ["Europe", "Asia"]);
        assert_eq!(explorer.continent_options(), ["Europe", "Asia"]);
    }
}
