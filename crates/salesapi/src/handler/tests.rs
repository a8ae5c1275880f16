use super::*;
use crate::{service::CUSTOMER_HAS_SALES, test_support::MemoryStore};
use axum::{
    body::Body,
    http::{Method, Request, header::LOCATION},
    response::Response,
};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(store: &Arc<MemoryStore>) -> Router {
    let state = AppState::with_repositories(store.repositories());
    AppRouter::build(state, &RouterOptions::default()).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn create_returns_201_with_location() {
    let store = MemoryStore::new();

    let response = app(&store)
        .oneshot(json_request(
            Method::POST,
            "/api/products",
            json!({ "productName": "Widget", "price": 10.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[LOCATION].to_str().unwrap().to_string();

    let body = body_json(response).await;
    assert_eq!(body["productName"], "Widget");
    assert_eq!(location, format!("/api/products/{}", body["productID"]));
}

#[tokio::test]
async fn missing_row_is_404_without_body() {
    let store = MemoryStore::new();

    let response = app(&store)
        .oneshot(empty_request(Method::GET, "/api/customers/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn id_mismatch_is_400() {
    let store = MemoryStore::new();
    let product = store.seed_product("Widget", dec!(10.00));

    let response = app(&store)
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/products/{}", product.product_id),
            json!({
                "productID": product.product_id + 1,
                "productName": "Widget",
                "price": 11.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "ID mismatch");
}

#[tokio::test]
async fn successful_update_and_delete_are_204() {
    let store = MemoryStore::new();
    let customer = store.seed_customer("Ada", "ada@example.com");
    let uri = format!("/api/customers/{}", customer.customer_id);
    let app = app(&store);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &uri,
            json!({
                "customerID": customer.customer_id,
                "fullName": "Ada Lovelace",
                "email": "ada@example.com"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_referenced_customer_is_400_with_message() {
    let store = MemoryStore::new();
    let product = store.seed_product("Widget", dec!(10.00));
    let customer = store.seed_customer("Ada Lovelace", "ada@example.com");
    store.seed_sale(customer.customer_id, product.product_id, 1);

    let response = app(&store)
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/customers/{}", customer.customer_id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], CUSTOMER_HAS_SALES);
}

#[tokio::test]
async fn validation_failures_are_400() {
    let store = MemoryStore::new();
    let product = store.seed_product("Widget", dec!(10.00));
    let customer = store.seed_customer("Ada Lovelace", "ada@example.com");

    let response = app(&store)
        .oneshot(json_request(
            Method::POST,
            "/api/sales",
            json!({
                "productID": product.product_id,
                "customerID": customer.customer_id,
                "quantity": 0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Quantity must be at least 1"
    );
}

#[tokio::test]
async fn malformed_json_is_400() {
    let store = MemoryStore::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/customers")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"fullName\": "))
        .unwrap();

    let response = app(&store).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn price_beyond_column_precision_is_400() {
    let store = MemoryStore::new();

    let response = app(&store)
        .oneshot(json_request(
            Method::POST,
            "/api/products",
            json!({ "productName": "Big", "price": 100000000000000000_i64 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Price is too large");
}

#[tokio::test]
async fn bad_query_string_is_400_with_error_body() {
    let store = MemoryStore::new();

    let response = app(&store)
        .oneshot(empty_request(Method::GET, "/api/products?pageNumber=abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("pageNumber"));
}

#[tokio::test]
async fn id_out_of_range_is_400_with_error_body() {
    let store = MemoryStore::new();

    for (method, uri) in [
        (Method::GET, "/api/products/99999999999"),
        (Method::DELETE, "/api/customers/99999999999"),
        (Method::GET, "/api/sales/abc"),
    ] {
        let response = app(&store)
            .oneshot(empty_request(method, uri))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body["status"], "error", "{uri}");
    }
}

#[tokio::test]
async fn sale_with_unknown_customer_is_400() {
    let store = MemoryStore::new();
    let product = store.seed_product("Widget", dec!(10.00));

    let response = app(&store)
        .oneshot(json_request(
            Method::POST,
            "/api/sales",
            json!({ "productID": product.product_id, "customerID": 77, "quantity": 2 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sales_list_carries_paging_and_revenue() {
    let store = MemoryStore::new();
    let product = store.seed_product("Widget", dec!(10.00));
    let customer = store.seed_customer("Ada Lovelace", "ada@example.com");
    store.seed_sale(customer.customer_id, product.product_id, 3);
    store.seed_sale(customer.customer_id, product.product_id, 1);
    store.seed_sale(customer.customer_id, product.product_id, 2);

    let response = app(&store)
        .oneshot(empty_request(
            Method::GET,
            "/api/sales?pageNumber=1&pageSize=2&sortBy=Quantity&isAscending=false",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["pageNumber"], 1);
    assert_eq!(body["pageSize"], 2);
    assert_eq!(body["totalCount"], 3);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["totalRevenue"], 60.0);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["quantity"], 3);
    assert_eq!(data[0]["total"], 30.0);
    assert_eq!(data[0]["customerName"], "Ada Lovelace");
    assert_eq!(data[1]["quantity"], 2);
}

#[tokio::test]
async fn list_defaults_apply_without_query() {
    let store = MemoryStore::new();
    store.seed_customer("Ada Lovelace", "ada@example.com");

    let response = app(&store)
        .oneshot(empty_request(Method::GET, "/api/customers"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["pageNumber"], 1);
    assert_eq!(body["pageSize"], 10);
    assert!(body.get("totalRevenue").is_none());
    assert_eq!(body["data"][0]["fullName"], "Ada Lovelace");
}

#[tokio::test]
async fn metrics_endpoint_exposes_service_counters() {
    let store = MemoryStore::new();
    let app = app(&store);

    app.clone()
        .oneshot(empty_request(Method::GET, "/api/products"))
        .await
        .unwrap();

    let response = app
        .oneshot(empty_request(Method::GET, "/metrics"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("product_query_service_requests_total"));
    assert!(text.contains("sale_command_service_request_duration_seconds"));
}

#[tokio::test]
async fn openapi_document_lists_every_resource() {
    let store = MemoryStore::new();

    let response = app(&store)
        .oneshot(empty_request(Method::GET, "/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    for path in [
        "/api/products",
        "/api/products/{id}",
        "/api/customers",
        "/api/customers/{id}",
        "/api/sales",
        "/api/sales/{id}",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing {path}");
    }
}
