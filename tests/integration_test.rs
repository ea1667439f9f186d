use reqwest::StatusCode;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use transaction_ledger::adapters::MemoryTransactionStore;
use transaction_ledger::{create_app, AppState};

async fn setup_test_app() -> String {
    let app = create_app(AppState::new(Arc::new(MemoryTransactionStore::new())));

    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let server = axum::Server::bind(&addr).serve(app.into_make_service());
    let actual_addr = server.local_addr();

    tokio::spawn(async move {
        server.await.unwrap();
    });

    format!("http://{}", actual_addr)
}

fn payload(id: &str, amount: i64, currency: &str, effective_at: &str) -> Value {
    json!({
        "id": id,
        "amount": amount,
        "currency": currency,
        "effective_at": effective_at,
    })
}

#[tokio::test]
async fn test_create_retry_and_fetch_flow() {
    let base_url = setup_test_app().await;
    let client = reqwest::Client::new();

    let mut body = payload("txn-1", 1250, "USD", "2024-01-10T12:00:00Z");
    body["metadata"] = json!({"reference_id": "INV-1042", "channel": "web"});

    let res = client
        .post(format!("{}/transactions", base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.headers().contains_key("x-request-id"));

    let res = client
        .post(format!("{}/transactions", base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let retried: Value = res.json().await.unwrap();
    assert_eq!(retried["metadata"]["reference_id"], "INV-1042");

    let mut changed = body.clone();
    changed["metadata"]["channel"] = json!("mobile");
    let res = client
        .post(format!("{}/transactions", base_url))
        .json(&changed)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = client
        .get(format!("{}/transactions/txn-1", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched["amount"], 1250);
    assert_eq!(fetched["metadata"]["channel"], "web");
}

#[tokio::test]
async fn test_list_filters_by_end_date_and_currency() {
    let base_url = setup_test_app().await;
    let client = reqwest::Client::new();

    for body in [
        payload("late", 300, "USD", "2024-01-12T00:00:00Z"),
        payload("on-day", 200, "usd", "2024-01-10T12:00:00Z"),
        payload("early", 100, "EUR", "2024-01-01T00:00:00Z"),
    ] {
        let res = client
            .post(format!("{}/transactions", base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client
        .get(format!("{}/transactions?end_date=2024-01-10", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let list: Vec<Value> = res.json().await.unwrap();
    let ids: Vec<&str> = list.iter().filter_map(|t| t["id"].as_str()).collect();
    assert_eq!(ids, ["early", "on-day"]);

    let res = client
        .get(format!("{}/transactions?currency=Usd", base_url))
        .send()
        .await
        .unwrap();
    let list: Vec<Value> = res.json().await.unwrap();
    let ids: Vec<&str> = list.iter().filter_map(|t| t["id"].as_str()).collect();
    assert_eq!(ids, ["on-day", "late"]);
}

#[tokio::test]
async fn test_list_rejects_out_of_range_limit() {
    let base_url = setup_test_app().await;

    let res = reqwest::get(format!("{}/transactions?limit=1001", base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let base_url = setup_test_app().await;

    let res = reqwest::Client::new()
        .delete(format!("{}/transactions", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}
