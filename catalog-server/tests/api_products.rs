mod common;

use common::{app, get, ids, send};
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn lists_whole_catalog_featured_first() {
    let app = app();
    let (status, body) = get(&app, "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 16);
    assert_eq!(ids(&body)[..6], [1, 2, 4, 6, 9, 14]);
    assert_eq!(body["products"][0]["price"], "₹89,999");
    assert_eq!(body["products"][0]["inStock"], true);
}

#[tokio::test]
async fn filters_by_category_search_and_price() {
    let app = app();

    let (_, body) = get(&app, "/api/products?category=Networking&sortBy=price-low").await;
    assert_eq!(ids(&body), vec![16, 2, 15]);

    let (_, body) = get(&app, "/api/products?search=firewall").await;
    assert_eq!(ids(&body), vec![4, 11]);

    let (_, body) = get(&app, "/api/products?priceRange=10,30&sortBy=price-high").await;
    assert_eq!(ids(&body), vec![8, 2, 16]);

    let (_, body) = get(&app, "/api/products?category=all&search=zzz").await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["products"], json!([]));
}

#[tokio::test]
async fn filters_by_ratings_and_brands() {
    let app = app();

    // smallest selected bucket wins: everything rated 4.0 or better
    let (_, body) = get(&app, "/api/products?ratings=5,4").await;
    assert_eq!(body["total"], 14);
    assert!(!ids(&body).contains(&12));
    assert!(!ids(&body).contains(&15));

    let (status, _) = get(&app, "/api/products?ratings=4.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, "/api/products?brands=cisco,hp&sortBy=newest").await;
    assert_eq!(ids(&body), vec![16, 15, 4, 3, 2]);

    let (_, body) = get(&app, "/api/products?ratings=5&sortBy=rating").await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn rejects_unknown_and_malformed_parameters() {
    let app = app();

    let (status, body) = get(&app, "/api/products?color=red").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    let (status, body) = get(&app, "/api/products?priceRange=cheap").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "priceRange");
}

#[tokio::test]
async fn get_by_id_and_not_found() {
    let app = app();

    let (status, body) = get(&app, "/api/products/9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Zero Trust Access Solution");

    let (status, body) = get(&app, "/api/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
    assert_eq!(body["message"], "Product 999 not found");

    let (status, body) = get(&app, "/api/products/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn create_returns_201_and_invalidates_listing() {
    let app = app();
    let (_, before) = get(&app, "/api/products?category=networking").await;
    assert_eq!(before["total"], 3);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({
            "title": "Edge Router",
            "description": "Branch office router",
            "price": "₹18,500",
            "category": "networking",
            "tags": ["router"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 17);
    assert_eq!(created["price"], "₹18,500");
    assert_eq!(created["inStock"], true);

    let (_, after) = get(&app, "/api/products?category=networking").await;
    assert_eq!(after["total"], 4);
    assert!(ids(&after).contains(&17));
}

#[tokio::test]
async fn create_with_bad_price_is_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({
            "title": "Mystery Box",
            "description": "?",
            "price": "free",
            "category": "solutions"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);
    assert_eq!(body["details"]["field"], "price");
}

#[tokio::test]
async fn only_price_fields_report_invalid_price() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/products/1",
        Some(json!({ "featured": "price" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/products/1",
        Some(json!({ "price": "call for price" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);

    let (_, product) = get(&app, "/api/products/1").await;
    assert_eq!(product["featured"], true);
}

#[tokio::test]
async fn update_merges_and_delete_returns_removed() {
    let app = app();

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/products/5",
        Some(json!({ "inStock": true, "price": 41999 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 5);
    assert_eq!(updated["inStock"], true);
    assert_eq!(updated["price"], "₹41,999");
    assert_eq!(updated["title"], "Server Processors");

    let (status, removed) = send(&app, Method::DELETE, "/api/products/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["id"], 5);

    let (status, _) = get(&app, "/api/products/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, all) = get(&app, "/api/products").await;
    assert_eq!(all["total"], 15);
}

#[tokio::test]
async fn update_and_delete_missing_are_404() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/products/404",
        Some(json!({ "title": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product 404 not found");

    let (status, _) = send(&app, Method::DELETE, "/api/products/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = get(&app, "/api/products").await;
    assert_eq!(all["total"], 16);
}
