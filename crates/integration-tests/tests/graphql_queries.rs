//! Integration tests for catalog queries over HTTP.

use catalog_integration_tests::{TestServer, names};
use serde_json::{Value, json};

const SHOVEL_ID: &str = "404daf2a-9b97-4b99-b9af-614d07f818d7";
const GARDEN_ID: &str = "34115aac-0ff5-4859-8f43-10e8db23602b";

async fn server() -> TestServer {
    TestServer::spawn().await.expect("Failed to start server")
}

// =============================================================================
// Root Queries
// =============================================================================

#[tokio::test]
async fn test_hello() {
    let server = server().await;
    let body = server
        .graphql("{ hello }", Value::Null)
        .await
        .expect("Request failed");

    assert_eq!(body["data"]["hello"], "Hello World!");
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_categories_in_seed_order() {
    let server = server().await;
    let body = server
        .graphql("{ categories { id name } }", Value::Null)
        .await
        .expect("Request failed");

    assert_eq!(names(&body, "categories"), ["Kitchen", "Garden", "Sports"]);
}

#[tokio::test]
async fn test_all_products_unfiltered() {
    let server = server().await;
    let body = server
        .graphql("{ products { name } }", Value::Null)
        .await
        .expect("Request failed");

    assert_eq!(
        names(&body, "products"),
        [
            "Steel Pot",
            "Salad Bowl",
            "Spoon",
            "Shovel",
            "Fertilizer",
            "Basketball",
            "Golf Clubs",
            "Baseball Gloves",
            "Soccer Ball",
        ]
    );
}

#[tokio::test]
async fn test_product_by_id_with_relationships() {
    let server = server().await;
    let body = server
        .graphql(
            "query($id: ID!) { product(id: $id) { name category { name } reviews { rating } } }",
            json!({ "id": SHOVEL_ID }),
        )
        .await
        .expect("Request failed");

    let product = &body["data"]["product"];
    assert_eq!(product["name"], "Shovel");
    assert_eq!(product["category"]["name"], "Garden");
    assert_eq!(product["reviews"], json!([{ "rating": 1 }, { "rating": 2 }]));
}

#[tokio::test]
async fn test_unknown_ids_resolve_to_null() {
    let server = server().await;
    let body = server
        .graphql(
            r#"{ product(id: "missing") { name } category(id: "missing") { name } }"#,
            Value::Null,
        )
        .await
        .expect("Request failed");

    assert!(body["data"]["product"].is_null());
    assert!(body["data"]["category"].is_null());
    assert!(body.get("errors").is_none());
}

// =============================================================================
// Filtering
// =============================================================================

#[tokio::test]
async fn test_on_sale_and_rating_filter() {
    let server = server().await;
    let body = server
        .graphql(
            "{ products(filter: { onSale: true, avgRating: 4 }) { name } }",
            Value::Null,
        )
        .await
        .expect("Request failed");

    assert_eq!(names(&body, "products"), ["Spoon", "Fertilizer", "Soccer Ball"]);
}

#[tokio::test]
async fn test_category_products_filter() {
    let server = server().await;
    let body = server
        .graphql(
            "query($id: ID!) { category(id: $id) { products(filter: { onSale: true }) { name } } }",
            json!({ "id": GARDEN_ID }),
        )
        .await
        .expect("Request failed");

    assert_eq!(
        body["data"]["category"]["products"],
        json!([{ "name": "Fertilizer" }])
    );
}

// =============================================================================
// Error Responses
// =============================================================================

#[tokio::test]
async fn test_invalid_document_reports_errors() {
    let server = server().await;
    let body = server
        .graphql("{ products { nope } }", Value::Null)
        .await
        .expect("Request failed");

    let errors = body["errors"].as_array().expect("errors should be present");
    assert!(!errors.is_empty());
}

#[tokio::test]
async fn test_missing_required_argument() {
    let server = server().await;
    let body = server
        .graphql("{ product { name } }", Value::Null)
        .await
        .expect("Request failed");

    assert!(body["errors"].is_array());
}
