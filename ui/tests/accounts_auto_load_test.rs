//! End-to-end check that the app fetches the session user and the account
//! list on its own and fills the table from the response.

mod common;

use kittest::Queryable;

use common::TestCtx;

#[tokio::test]
async fn test_app_loads_accounts_without_interaction() {
    let mut ctx = TestCtx::new_app(serde_json::json!([
        {
            "id": 1,
            "username": "a",
            "id_code": "025111222",
            "firstName": "A",
            "lastName": "B",
            "birthDate": "1990-05-20",
            "roleName": "Admin",
            "role": "1",
            "active": false
        }
    ]))
    .await;

    let loaded = ctx
        .step_until(|harness| harness.query_by_label("a").is_some())
        .await;
    assert!(loaded, "the account row should appear without any clicks");

    let harness = ctx.harness();
    assert!(harness.query_by_label("A  B").is_some());
    assert!(harness.query_by_label("không hđ").is_some());
}

#[tokio::test]
async fn test_app_shows_placeholder_for_empty_account_list() {
    let mut ctx = TestCtx::new_app(serde_json::json!([])).await;

    let loaded = ctx
        .step_until(|harness| harness.query_by_label("No Data Found").is_some())
        .await;
    assert!(loaded, "the empty placeholder should appear once the list loads");
}
