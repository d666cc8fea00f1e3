use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use grocery_catalog::repository::DieselRepository;
use grocery_catalog::routes::json_config;
use grocery_catalog::routes::main::health;
use grocery_catalog::routes::products::{
    create_product, delete_product, get_product, list_products, update_product,
};

mod common;

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(web::Data::new($repo))
                .service(health)
                .service(
                    web::scope("/products")
                        .service(list_products)
                        .service(get_product)
                        .service(create_product)
                        .service(update_product)
                        .service(delete_product),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn health_endpoint_reports_ok() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["status"], json!("ok"));
}

#[actix_web::test]
async fn create_then_get_roundtrip() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Milk", "price": 2.5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Product created successfully"));
    assert_eq!(body["data"]["name"], json!("Milk"));
    assert_eq!(body["data"]["price"], json!(2.5));
    assert_eq!(body["data"]["stock"], json!(0));
    assert_eq!(body["data"]["inStock"], json!(false));
    assert_eq!(body["data"]["category"], Value::Null);
    assert_eq!(body["data"]["imageUrl"], Value::Null);
    assert_eq!(body["data"]["description"], Value::Null);
    assert!(body["data"]["createdAt"].is_string());

    let id = body["data"]["id"].as_i64().expect("id should be a number");
    let req = test::TestRequest::get()
        .uri(&format!("/products/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], json!("Milk"));
}

#[actix_web::test]
async fn create_without_price_is_rejected() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Milk"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Validation failed"));
    assert!(
        body["message"]
            .as_str()
            .expect("message should be a string")
            .contains("price")
    );
}

#[actix_web::test]
async fn malformed_id_and_missing_id_are_distinct() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::get().uri("/products/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Invalid product ID format"));

    let req = test::TestRequest::get().uri("/products/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Product not found"));
}

#[actix_web::test]
async fn list_filters_and_paginates() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    for (name, category, description) in [
        ("Red Apple", "Fruits", "Crisp red apple"),
        ("Green Apple", "Fruits", "Tart green apple"),
        ("Apple Juice", "Drinks", "Pressed from apples"),
        ("Whole Milk", "Dairy", "Fresh whole milk"),
    ] {
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({
                "name": name,
                "price": 1.0,
                "category": category,
                "description": description
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/products?q=apple")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["pagination"]["totalItems"], json!(3));

    let req = test::TestRequest::get()
        .uri("/products?q=apple&category=Fruits")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["pagination"]["totalItems"], json!(2));

    let req = test::TestRequest::get()
        .uri("/products?page=2&limit=3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["products"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["pagination"]["currentPage"], json!(2));
    assert_eq!(body["pagination"]["totalPages"], json!(2));
    assert_eq!(body["pagination"]["limit"], json!(3));
    assert_eq!(body["pagination"]["hasNextPage"], json!(false));
    assert_eq!(body["pagination"]["hasPrevPage"], json!(true));
}

#[actix_web::test]
async fn limit_is_clamped_but_never_rejected_above_the_ceiling() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::get()
        .uri("/products?limit=500")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["pagination"]["limit"], json!(100));

    let req = test::TestRequest::get()
        .uri("/products?limit=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/products?page=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn astronomically_large_page_yields_an_empty_window() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Milk", "price": 2.5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/products?page=9223372036854775807&limit=100")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["products"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["pagination"]["totalItems"], json!(1));
    assert_eq!(body["pagination"]["hasNextPage"], json!(false));
}

#[actix_web::test]
async fn repeated_listing_is_idempotent() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    for name in ["Bread", "Butter"] {
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({"name": name, "price": 1.5}))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/products?page=1&limit=10")
        .to_request();
    let first: Value = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri("/products?page=1&limit=10")
        .to_request();
    let second: Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(first, second);
}

#[actix_web::test]
async fn update_guards_and_partial_semantics() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Milk", "price": 2.5, "stock": 4}))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["id"].as_i64().expect("id should be a number");

    // Partial update touches only the supplied field.
    let req = test::TestRequest::put()
        .uri(&format!("/products/{id}"))
        .set_json(json!({"price": 3.0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], json!("Product updated successfully"));
    assert_eq!(body["data"]["price"], json!(3.0));
    assert_eq!(body["data"]["name"], json!("Milk"));
    assert_eq!(body["data"]["stock"], json!(4));

    // createdAt is immutable.
    let req = test::TestRequest::put()
        .uri(&format!("/products/{id}"))
        .set_json(json!({"createdAt": "2020-01-01T00:00:00"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Negative stock is rejected and the entity stays unchanged.
    let req = test::TestRequest::put()
        .uri(&format!("/products/{id}"))
        .set_json(json!({"stock": -1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // An empty payload has nothing to update.
    let req = test::TestRequest::put()
        .uri(&format!("/products/{id}"))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], json!("No valid fields provided for update"));

    let req = test::TestRequest::get()
        .uri(&format!("/products/{id}"))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["stock"], json!(4));

    // Updating a missing product is a 404 once the id shape is valid.
    let req = test::TestRequest::put()
        .uri("/products/999")
        .set_json(json!({"price": 1.0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_flow_reports_the_removed_product() {
    let test_db = common::TestDb::new();
    let app = init_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Yogurt", "price": 1.2}))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["id"].as_i64().expect("id should be a number");

    let req = test::TestRequest::delete()
        .uri(&format!("/products/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        json!("Product \"Yogurt\" deleted successfully")
    );
    assert_eq!(body["data"]["name"], json!("Yogurt"));
    assert!(body["data"]["deletedAt"].is_string());

    let req = test::TestRequest::get()
        .uri(&format!("/products/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/products/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
