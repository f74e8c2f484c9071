use std::sync::Arc;

use skillmatch::services::search::{
    SearchSession, SearchState, fetch_providers, filter_by_location,
};

mod common;

use common::{StubBackend, provider};

fn sample_backend() -> Arc<StubBackend> {
    Arc::new(StubBackend::new(vec![
        provider("plumber@example.com", &["Plumbing"], &["Brooklyn"]),
        provider("tutor@example.com", &["Tutoring"], &["Queens"]),
    ]))
}

#[tokio::test]
async fn skill_query_matches_case_insensitive_substring() {
    let backend = sample_backend();
    let records = fetch_providers(backend.as_ref(), "plumb").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].email, "plumber@example.com");
}

#[tokio::test]
async fn empty_query_returns_everything_in_backend_order() {
    let backend = sample_backend();
    let records = fetch_providers(backend.as_ref(), "").await.unwrap();
    assert_eq!(records, backend.providers);
}

#[tokio::test]
async fn unmatched_query_yields_empty_result() {
    let backend = sample_backend();
    let mut session = SearchSession::new(sample_backend());
    assert!(fetch_providers(backend.as_ref(), "zzz").await.unwrap().is_empty());

    session.search("zzz").await;
    assert!(session.results().is_empty());
    assert_eq!(session.state(), SearchState::Fetched);
}

#[tokio::test]
async fn backend_failure_surfaces_as_empty_results_not_panic() {
    let mut session = SearchSession::new(Arc::new(StubBackend::failing()));
    let results = session.search("plumb").await;
    assert!(results.is_empty());
    assert_eq!(session.state(), SearchState::FetchFailed);
}

#[tokio::test]
async fn location_filter_rederives_from_cache_without_refetch() {
    let mut session = SearchSession::new(sample_backend());
    session.search("").await;
    assert_eq!(session.results().len(), 2);

    session.set_location_filter("queens");
    assert_eq!(session.state(), SearchState::Filtered);
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].email, "tutor@example.com");

    // Clearing the filter restores the full cached list, order intact.
    session.set_location_filter("");
    assert_eq!(session.results(), session.fetched());
}

#[tokio::test]
async fn visible_results_are_a_subset_of_the_fetched_set() {
    let mut session = SearchSession::new(sample_backend());
    session.search("").await;
    session.set_location_filter("brook");
    for record in session.results() {
        assert!(session.fetched().contains(record));
    }
}

#[tokio::test]
async fn location_filter_persists_across_fetches() {
    let mut session = SearchSession::new(sample_backend());
    session.set_location_filter("queens");
    session.search("").await;
    assert_eq!(session.state(), SearchState::Fetched);
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].locations, vec!["Queens"]);
}

#[tokio::test]
async fn stale_fetch_outcomes_are_discarded() {
    let backend = sample_backend();
    let mut session = SearchSession::new(Arc::clone(&backend));

    let first = session.begin_fetch("plumb");
    let second = session.begin_fetch("tutor");

    let first_outcome = fetch_providers(backend.as_ref(), first.query()).await;
    let second_outcome = fetch_providers(backend.as_ref(), second.query()).await;

    // The newer fetch resolves first; the older one must not clobber it.
    assert!(session.apply_fetch(second, second_outcome));
    assert!(!session.apply_fetch(first, first_outcome));

    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].email, "tutor@example.com");
}

#[tokio::test]
async fn state_machine_walks_the_documented_transitions() {
    let backend = sample_backend();
    let mut session = SearchSession::new(Arc::clone(&backend));
    assert_eq!(session.state(), SearchState::Idle);

    let ticket = session.begin_fetch("plumb");
    assert_eq!(session.state(), SearchState::Fetching);

    let outcome = fetch_providers(backend.as_ref(), ticket.query()).await;
    session.apply_fetch(ticket, outcome);
    assert_eq!(session.state(), SearchState::Fetched);

    session.set_location_filter("brooklyn");
    assert_eq!(session.state(), SearchState::Filtered);

    session.begin_fetch("tutor");
    assert_eq!(session.state(), SearchState::Fetching);
}

#[test]
fn filter_by_location_identity_and_case_rules() {
    let records = vec![
        provider("a@example.com", &["A"], &["Brooklyn"]),
        provider("b@example.com", &["B"], &["Queens"]),
    ];
    assert_eq!(filter_by_location(&records, "  "), records);
    assert_eq!(
        filter_by_location(&records, "NYC"),
        filter_by_location(&records, "nyc")
    );
    assert_eq!(filter_by_location(&records, "QuEeNs").len(), 1);
}
