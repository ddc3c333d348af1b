//! Behavioural tests for the article list view against a mock service.

#[path = "article_list_bdd/mod.rs"]
mod article_list_bdd_support;

use article_list_bdd_support::{ArticleListState, ensure_runtime_and_server};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use scholar_desk::articles::test_support::{article_json, listing_json};
use scholar_desk::{ArticleError, ArticleId};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[fixture]
fn article_list_state() -> ArticleListState {
    ArticleListState::default()
}

fn mount(state: &ArticleListState, mock: Mock) {
    let runtime = ensure_runtime_and_server(state);
    state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .unwrap_or_else(|| panic!("mock server not initialised"));
}

fn mount_listing(state: &ArticleListState, body: Value) {
    mount(
        state,
        Mock::given(method("GET"))
            .and(path("/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body)),
    );
}

fn is_collection(request_path: &str) -> bool {
    request_path == "/articles"
}

fn is_item(request_path: &str) -> bool {
    request_path.starts_with("/articles/")
}

// Given steps

#[given("the article service lists {count:u64} articles")]
fn seed_listing(article_list_state: &ArticleListState, count: u64) {
    mount_listing(article_list_state, listing_json(count));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("the article service lists article {id:u64} titled {title} by {authors} from {year:i32}")]
fn seed_single_article(
    article_list_state: &ArticleListState,
    id: u64,
    title: String,
    authors: String,
    year: i32,
) {
    let article = article_json(id, title.trim_matches('"'), authors.trim_matches('"'), year);
    mount_listing(article_list_state, json!([article]));
}

#[given("the article service fails listings with status {status:u16}")]
fn seed_failing_listing(article_list_state: &ArticleListState, status: u16) {
    mount(
        article_list_state,
        Mock::given(method("GET"))
            .and(path("/articles"))
            .respond_with(ResponseTemplate::new(status)),
    );
}

#[given("the article service accepts deletions")]
fn seed_accepting_deletions(article_list_state: &ArticleListState) {
    mount(
        article_list_state,
        Mock::given(method("DELETE")).respond_with(ResponseTemplate::new(204)),
    );
}

#[given("the article service rejects deletions with status {status:u16}")]
fn seed_rejecting_deletions(article_list_state: &ArticleListState, status: u16) {
    mount(
        article_list_state,
        Mock::given(method("DELETE")).respond_with(ResponseTemplate::new(status)),
    );
}

#[given("the user will accept the confirmation")]
fn user_accepts(article_list_state: &ArticleListState) {
    article_list_state.answers.set(vec![true]);
}

#[given("the user will decline the confirmation")]
fn user_declines(article_list_state: &ArticleListState) {
    article_list_state.answers.set(vec![false]);
}

// When steps

#[when("the article list is initialised")]
fn initialise_list(article_list_state: &ArticleListState) -> Result<(), ArticleError> {
    let runtime = ensure_runtime_and_server(article_list_state);
    article_list_state.build_view()?;
    article_list_state
        .view
        .with_ref(|view| runtime.block_on(view.initialise()))
        .ok_or_else(|| ArticleError::Configuration {
            message: "view not built".to_owned(),
        })?;
    Ok(())
}

#[when("the user deletes article {id:u64}")]
fn delete_article(article_list_state: &ArticleListState, id: u64) -> Result<(), ArticleError> {
    let runtime = ensure_runtime_and_server(article_list_state);
    let article_id = ArticleId::parse(&id.to_string())?;
    article_list_state
        .view
        .with_ref(|view| runtime.block_on(view.delete(&article_id)))
        .ok_or_else(|| ArticleError::Configuration {
            message: "view not built".to_owned(),
        })?;
    Ok(())
}

// Then steps

#[then("the list shows {count:usize} rows")]
fn assert_row_count(article_list_state: &ArticleListState, count: usize) {
    let content = article_list_state
        .surface()
        .current()
        .unwrap_or_else(|| panic!("nothing rendered"));

    assert_eq!(content.row_count(), count, "unexpected content: {content:?}");
    assert!(content.placeholder_text().is_none(), "expected data rows");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("row {index:usize} reads {cells}")]
fn assert_row_cells(article_list_state: &ArticleListState, index: usize, cells: String) {
    let content = article_list_state
        .surface()
        .current()
        .unwrap_or_else(|| panic!("nothing rendered"));
    let row = content
        .rows()
        .get(index.saturating_sub(1))
        .unwrap_or_else(|| panic!("row {index} missing from {content:?}"));

    assert_eq!(row.cells().join(" | "), cells.trim_matches('"'));
}

#[then("row {index:usize} has a delete control")]
fn assert_row_has_control(article_list_state: &ArticleListState, index: usize) {
    let content = article_list_state
        .surface()
        .current()
        .unwrap_or_else(|| panic!("nothing rendered"));
    let row = content
        .rows()
        .get(index.saturating_sub(1))
        .unwrap_or_else(|| panic!("row {index} missing from {content:?}"));

    assert_eq!(
        row.delete_target.as_ref().map(ArticleId::as_str),
        Some(row.id.as_str())
    );
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the list shows the placeholder {text}")]
fn assert_placeholder(article_list_state: &ArticleListState, text: String) {
    let content = article_list_state
        .surface()
        .current()
        .unwrap_or_else(|| panic!("nothing rendered"));

    assert_eq!(content.row_count(), 1, "expected a single placeholder row");
    assert_eq!(
        content.placeholder_text().as_deref(),
        Some(text.trim_matches('"'))
    );
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the user was asked {question}")]
fn assert_question(article_list_state: &ArticleListState, question: String) {
    assert_eq!(
        article_list_state.prompt().questions(),
        vec![question.trim_matches('"').to_owned()]
    );
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the user is alerted {message}")]
fn assert_alert(article_list_state: &ArticleListState, message: String) {
    assert_eq!(
        article_list_state.prompt().notices(),
        vec![message.trim_matches('"').to_owned()]
    );
}

#[then("no deletion request was sent")]
fn assert_no_deletion(article_list_state: &ArticleListState) {
    assert_eq!(article_list_state.count_requests("DELETE", is_item), 0);
}

#[then("the article service received {count:usize} deletion requests")]
fn assert_deletions(article_list_state: &ArticleListState, count: usize) {
    assert_eq!(article_list_state.count_requests("DELETE", is_item), count);
}

#[then("the article service received {count:usize} listing requests")]
fn assert_listings(article_list_state: &ArticleListState, count: usize) {
    assert_eq!(
        article_list_state.count_requests("GET", is_collection),
        count
    );
}

#[scenario(path = "tests/features/article_list.feature", index = 0)]
fn listing_renders_rows(article_list_state: ArticleListState) {
    let _ = article_list_state;
}

#[scenario(path = "tests/features/article_list.feature", index = 1)]
fn single_article_renders_cells(article_list_state: ArticleListState) {
    let _ = article_list_state;
}

#[scenario(path = "tests/features/article_list.feature", index = 2)]
fn empty_listing_shows_placeholder(article_list_state: ArticleListState) {
    let _ = article_list_state;
}

#[scenario(path = "tests/features/article_list.feature", index = 3)]
fn failing_listing_shows_error(article_list_state: ArticleListState) {
    let _ = article_list_state;
}

#[scenario(path = "tests/features/article_list.feature", index = 4)]
fn declined_deletion_is_harmless(article_list_state: ArticleListState) {
    let _ = article_list_state;
}

#[scenario(path = "tests/features/article_list.feature", index = 5)]
fn confirmed_deletion_reloads(article_list_state: ArticleListState) {
    let _ = article_list_state;
}

#[scenario(path = "tests/features/article_list.feature", index = 6)]
fn rejected_deletion_alerts(article_list_state: ArticleListState) {
    let _ = article_list_state;
}
