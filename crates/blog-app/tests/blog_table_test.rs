mod support;

use std::sync::Arc;

use blog_app::{BlogTableController, DeleteOutcome};
use blog_core::view::Boundary;
use blog_core::{BlogId, SearchFilter, SearchKey};
use support::{confirming_ui, scope, service, MockUi, RecordingNavigator, ScriptedStore};

async fn table_over(
    store: Arc<ScriptedStore>,
    ui: Arc<MockUi>,
) -> (BlogTableController, Arc<RecordingNavigator>) {
    let service = service(store);
    let rows = service.list_blogs().await.unwrap();
    let navigator = Arc::new(RecordingNavigator::default());
    let table = BlogTableController::new(rows, service, navigator.clone(), ui, scope());
    (table, navigator)
}

fn names(table: &BlogTableController) -> Vec<String> {
    table
        .visible_rows()
        .iter()
        .map(|b| b.display_name().to_string())
        .collect()
}

#[tokio::test]
async fn filter_is_case_insensitive_and_order_preserving() {
    let store = Arc::new(ScriptedStore::with_names(&[
        ("1", "Alpha"),
        ("2", "Beta"),
        ("3", "alpine"),
    ]));
    let (table, _) = table_over(store.clone(), confirming_ui()).await;
    let list_calls = store.list_calls();

    table.set_filter("al");
    assert_eq!(names(&table), vec!["Alpha", "alpine"]);

    table.set_filter("AL");
    assert_eq!(names(&table), vec!["Alpha", "alpine"]);

    table.set_filter("");
    assert_eq!(names(&table).len(), 3);
    assert_eq!(store.list_calls(), list_calls);
}

#[tokio::test]
async fn record_without_name_never_matches_a_non_empty_filter() {
    let store = Arc::new(ScriptedStore::with_names(&[("1", "Alpha")]));
    let service = service(store);
    let mut rows = service.list_blogs().await.unwrap();
    let mut nameless = rows[0].clone();
    nameless.id = BlogId::from("2");
    nameless.name = None;
    rows.push(nameless);

    let table = BlogTableController::new(
        rows,
        service,
        Arc::new(RecordingNavigator::default()),
        confirming_ui(),
        scope(),
    );

    table.set_filter("a");
    assert_eq!(table.visible_rows().len(), 1);
    table.set_filter("");
    assert_eq!(table.visible_rows().len(), 2);
}

#[tokio::test]
async fn multi_key_search_matches_any_configured_key() {
    let store = Arc::new(ScriptedStore::with_names(&[("abc", "Alpha"), ("xyz", "Beta")]));
    let (table, _) = table_over(store, confirming_ui()).await;
    let table = table.with_search(SearchFilter::new(vec![SearchKey::Id, SearchKey::Name]));

    table.set_filter("XY");
    assert_eq!(names(&table), vec!["Beta"]);
}

#[tokio::test]
async fn empty_result_shows_no_posts_message() {
    let store = Arc::new(ScriptedStore::with_names(&[("1", "Alpha")]));
    let (table, _) = table_over(store, confirming_ui()).await;

    assert_eq!(table.empty_message(), None);
    table.set_filter("zzz");
    assert_eq!(table.empty_message(), Some("No posts found."));
}

#[tokio::test]
async fn row_activation_opens_edit_page() {
    let store = Arc::new(ScriptedStore::with_names(&[("p1", "Alpha")]));
    let (table, navigator) = table_over(store, confirming_ui()).await;

    table.activate_row(&BlogId::from("p1"));

    assert_eq!(navigator.visited(), vec!["/manage/blogs/p1/edit"]);
}

#[tokio::test]
async fn declined_confirmation_calls_nothing_and_changes_nothing() {
    let store = Arc::new(ScriptedStore::with_names(&[("1", "Alpha"), ("2", "Beta")]));
    let mut ui = MockUi::new();
    ui.expect_confirm()
        .withf(|message| message.to_string() == "Are you sure you want to delete this post?")
        .times(1)
        .return_const(false);
    ui.expect_alert().never();
    let (table, _) = table_over(store.clone(), Arc::new(ui)).await;

    let outcome = table.delete_row(&BlogId::from("1")).await;

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(store.delete_calls(), 0);
    assert_eq!(table.rows().len(), 2);
    assert!(table.last_error().is_none());
}

#[tokio::test]
async fn confirmed_delete_removes_exactly_that_row_without_refetch() {
    let store = Arc::new(ScriptedStore::with_names(&[
        ("1", "Alpha"),
        ("2", "Beta"),
        ("3", "Gamma"),
    ]));
    let (table, _) = table_over(store.clone(), confirming_ui()).await;
    let list_calls = store.list_calls();

    let outcome = table.delete_row(&BlogId::from("2")).await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(names(&table), vec!["Alpha", "Gamma"]);
    assert_eq!(store.ids().await, vec!["1", "3"]);
    assert_eq!(store.list_calls(), list_calls);
}

#[tokio::test]
async fn failed_delete_keeps_rows_and_surfaces_error() {
    let store = Arc::new(ScriptedStore::with_names(&[("1", "Alpha")]));
    store.fail_delete_of("1");
    let (table, _) = table_over(store, confirming_ui()).await;

    let outcome = table.delete_row(&BlogId::from("1")).await;

    assert!(matches!(outcome, DeleteOutcome::Failed(_)));
    assert_eq!(table.rows().len(), 1);
    match table.view() {
        Boundary::Failed(text) => assert_eq!(text, "Error: transport error: timeout"),
        other => panic!("expected error fallback, got {other:?}"),
    }
}

#[tokio::test]
async fn deleting_an_already_deleted_row_fails_with_not_found() {
    let store = Arc::new(ScriptedStore::with_names(&[("1", "Alpha")]));
    let (table, _) = table_over(store, confirming_ui()).await;

    assert_eq!(table.delete_row(&BlogId::from("1")).await, DeleteOutcome::Deleted);
    let second = table.delete_row(&BlogId::from("1")).await;

    match second {
        DeleteOutcome::Failed(e) => assert!(e.is_not_found()),
        other => panic!("expected not-found failure, got {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_deletes_of_different_rows_both_apply() {
    let (store, gate) = ScriptedStore::with_names(&[
        ("1", "Alpha"),
        ("2", "Beta"),
        ("3", "Gamma"),
    ])
    .gated();
    let store = Arc::new(store);
    let (table, _) = table_over(store.clone(), confirming_ui()).await;
    let a = BlogId::from("1");
    let c = BlogId::from("3");

    let (first, second, ()) = tokio::join!(table.delete_row(&a), table.delete_row(&c), async {
        store.wait_for_parked(2).await;
        assert!(table.is_deleting());
        assert_eq!(table.view(), Boundary::Loading("Deleting post...".into()));
        gate.add_permits(2);
    });

    assert_eq!(first, DeleteOutcome::Deleted);
    assert_eq!(second, DeleteOutcome::Deleted);
    assert!(!table.is_deleting());
    assert_eq!(names(&table), vec!["Beta"]);
    assert!(table.view().is_ready());
}

#[tokio::test]
async fn delete_settling_after_unmount_leaves_rows_alone() {
    let (store, gate) = ScriptedStore::with_names(&[("1", "Alpha")]).gated();
    let store = Arc::new(store);
    let service = service(store.clone());
    let rows = service.list_blogs().await.unwrap();
    let table_scope = scope();
    let table = BlogTableController::new(
        rows,
        service,
        Arc::new(RecordingNavigator::default()),
        confirming_ui(),
        table_scope.clone(),
    );

    let id = BlogId::from("1");
    let (outcome, ()) = tokio::join!(table.delete_row(&id), async {
        store.wait_for_parked(1).await;
        table_scope.unmount();
        gate.add_permits(1);
    });

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(store.ids().await.is_empty());
    assert_eq!(table.rows().len(), 1);
}
