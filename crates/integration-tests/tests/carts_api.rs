//! Integration tests for the carts API.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use verdura_integration_tests::TestServer;

async fn create_product(client: &Client, base: &str, code: &str) -> i64 {
    let resp = client
        .post(format!("{base}/api/products"))
        .json(&json!({
            "title": "T",
            "description": "D",
            "code": code,
            "price": 10,
            "stock": 5,
            "category": "cat"
        }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to read response");
    body["product"]["id"].as_i64().expect("product id")
}

async fn create_cart(client: &Client, base: &str) -> i64 {
    let resp = client
        .post(format!("{base}/api/carts"))
        .send()
        .await
        .expect("Failed to create cart");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["cart"]["products"], json!([]));
    body["cart"]["id"].as_i64().expect("cart id")
}

#[tokio::test]
async fn test_cart_starts_empty() {
    let server = TestServer::spawn().await;
    let client = Client::new();
    let base = server.base_url();

    let cart_id = create_cart(&client, &base).await;
    assert_eq!(cart_id, 1);

    let resp = client
        .get(format!("{base}/api/carts/{cart_id}"))
        .send()
        .await
        .expect("Failed to get cart");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["products"], json!([]));
}

#[tokio::test]
async fn test_adding_same_product_accumulates_quantity() {
    let server = TestServer::spawn().await;
    let client = Client::new();
    let base = server.base_url();

    let product_id = create_product(&client, &base, "c5").await;
    let cart_id = create_cart(&client, &base).await;

    let resp = client
        .post(format!("{base}/api/carts/{cart_id}/product/{product_id}"))
        .json(&json!({ "quantity": 2 }))
        .send()
        .await
        .expect("Failed to add product");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .post(format!("{base}/api/carts/{cart_id}/product/{product_id}"))
        .json(&json!({ "quantity": 3 }))
        .send()
        .await
        .expect("Failed to add product");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to read response");

    assert_eq!(
        body["cart"]["products"],
        json!([{ "product": product_id, "quantity": 5 }])
    );
}

#[tokio::test]
async fn test_add_without_body_defaults_to_one() {
    let server = TestServer::spawn().await;
    let client = Client::new();
    let base = server.base_url();

    let product_id = create_product(&client, &base, "c1").await;
    let cart_id = create_cart(&client, &base).await;

    let resp = client
        .post(format!("{base}/api/carts/{cart_id}/product/{product_id}"))
        .send()
        .await
        .expect("Failed to add product");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to read response");

    assert_eq!(
        body["cart"]["products"],
        json!([{ "product": product_id, "quantity": 1 }])
    );
}

#[tokio::test]
async fn test_missing_cart_or_product_is_not_found() {
    let server = TestServer::spawn().await;
    let client = Client::new();
    let base = server.base_url();

    let product_id = create_product(&client, &base, "c1").await;
    let cart_id = create_cart(&client, &base).await;

    // Unknown product
    let resp = client
        .post(format!("{base}/api/carts/{cart_id}/product/99"))
        .send()
        .await
        .expect("Failed to add product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Unknown cart
    let resp = client
        .post(format!("{base}/api/carts/99/product/{product_id}"))
        .send()
        .await
        .expect("Failed to add product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Unknown cart lookup
    let resp = client
        .get(format!("{base}/api/carts/99"))
        .send()
        .await
        .expect("Failed to get cart");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The cart is still empty after the failed adds
    let resp = client
        .get(format!("{base}/api/carts/{cart_id}"))
        .send()
        .await
        .expect("Failed to get cart");
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["products"], json!([]));
}

#[tokio::test]
async fn test_cart_snapshot_round_trips() {
    let server = TestServer::spawn().await;
    let client = Client::new();
    let base = server.base_url();

    let product_id = create_product(&client, &base, "c1").await;
    let cart_id = create_cart(&client, &base).await;
    let resp = client
        .post(format!("{base}/api/carts/{cart_id}/product/{product_id}"))
        .json(&json!({ "quantity": 2 }))
        .send()
        .await
        .expect("Failed to add product");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let contents = std::fs::read_to_string(server.data_dir.join("carts.json"))
        .expect("Failed to read snapshot");
    let records: Value = serde_json::from_str(&contents).expect("snapshot is valid JSON");

    assert_eq!(
        records,
        json!([{ "id": cart_id, "products": [{ "product": product_id, "quantity": 2 }] }])
    );
}
