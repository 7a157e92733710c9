mod common;

use axum::http::StatusCode;
use common::{parse_body, token_for, TestApp};
use serde_json::{json, Value};

async fn post(app: &TestApp, uri: &str, token: &str, body: Value) -> Value {
    let res = app.send("POST", uri, Some(token), Some(body)).await;
    assert_eq!(res.status(), StatusCode::CREATED, "POST {} failed", uri);
    parse_body(res).await
}

fn venue(name: &str, capacity: u32, rate: f64) -> Value {
    json!({ "nombre": name, "capacidadPersonas": capacity, "precioPorHora": rate })
}

#[tokio::test]
async fn test_venues_sorted_by_name_and_shared_between_owners() {
    let app = TestApp::new().await;
    let laura = token_for("owner-1", "Laura");
    let pedro = token_for("owner-2", "Pedro");

    post(&app, "/api/v1/venues", &laura, venue("Terraza", 80, 900.0)).await;
    let diamante = post(&app, "/api/v1/venues", &pedro, venue("Diamante", 300, 2500.0)).await;
    assert_eq!(diamante["userId"], "owner-2");
    assert_eq!(diamante["tomasCorriente"], 0);

    let res = app.send("GET", "/api/v1/venues", Some(&laura), None).await;
    let venues = parse_body(res).await;
    let names: Vec<&str> = venues.as_array().unwrap().iter().map(|v| v["nombre"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Diamante", "Terraza"]);

    // Anyone signed in can edit the shared catalog
    let id = diamante["id"].as_str().unwrap();
    let res = app.send("PUT", &format!("/api/v1/venues/{}", id), Some(&laura), Some(json!({"precioPorHora": 2800.0}))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert_eq!(updated["precioPorHora"], 2800.0);
    assert_eq!(updated["userId"], "owner-2");
}

#[tokio::test]
async fn test_private_venue_catalog_is_owner_scoped() {
    let app = TestApp::with_catalog(false).await;
    let laura = token_for("owner-1", "Laura");
    let pedro = token_for("owner-2", "Pedro");

    let terraza = post(&app, "/api/v1/venues", &laura, venue("Terraza", 80, 900.0)).await;
    let id = terraza["id"].as_str().unwrap();

    let res = app.send("GET", "/api/v1/venues", Some(&pedro), None).await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 0);

    let res = app.send("DELETE", &format!("/api/v1/venues/{}", id), Some(&pedro), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.send("DELETE", &format!("/api/v1/venues/{}", id), Some(&laura), None).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_venue_requires_a_name() {
    let app = TestApp::new().await;
    let token = token_for("owner-1", "Laura");

    let res = app.send("POST", "/api/v1/venues", Some(&token), Some(venue("   ", 10, 1.0))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.send("POST", "/api/v1/venues", None, Some(venue("Patio", 10, 1.0))).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_venue_availability_for_a_day() {
    let app = TestApp::new().await;
    let token = token_for("owner-1", "Laura");

    for name in ["Diamante", "Perla", "Terraza"] {
        post(&app, "/api/v1/venues", &token, venue(name, 100, 1000.0)).await;
    }
    post(&app, "/api/v1/events", &token, json!({
        "type": "Congreso", "date": "2024-05-10", "startTime": "09:00", "endTime": "18:00",
        "venue": { "salon": "Perla" }
    })).await;

    let res = app.send("GET", "/api/v1/venues/availability?date=2024-05-10", Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["date"], "2024-05-10");
    assert_eq!(body["occupied"], json!(["Perla"]));
    let free: Vec<&str> = body["available"].as_array().unwrap().iter().map(|v| v["nombre"].as_str().unwrap()).collect();
    assert_eq!(free, vec!["Diamante", "Terraza"]);

    let res = app.send("GET", "/api/v1/venues/availability?date=2024-05-11", Some(&token), None).await;
    let body = parse_body(res).await;
    assert_eq!(body["occupied"], json!([]));
    assert_eq!(body["available"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_staff_roles() {
    let app = TestApp::new().await;
    let token = token_for("owner-1", "Laura");

    post(&app, "/api/v1/staff", &token, json!({"nombre": "Ana Ruiz", "telefono": "555-0101", "tipo": "coordinador"})).await;
    post(&app, "/api/v1/staff", &token, json!({"nombre": "Beto Díaz", "tipo": "mesero"})).await;
    let chef = post(&app, "/api/v1/staff", &token, json!({"nombre": "Carla Gómez", "tipo": "supervisor_cocina"})).await;
    assert_eq!(chef["telefono"], "");

    let res = app.send("GET", "/api/v1/staff", Some(&token), None).await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 3);

    let res = app.send("GET", "/api/v1/staff?role=mesero", Some(&token), None).await;
    let waiters = parse_body(res).await;
    assert_eq!(waiters.as_array().unwrap().len(), 1);
    assert_eq!(waiters[0]["nombre"], "Beto Díaz");

    let res = app.send("GET", "/api/v1/staff?role=kitchen_supervisor", Some(&token), None).await;
    assert_eq!(parse_body(res).await[0]["nombre"], "Carla Gómez");

    let res = app.send("GET", "/api/v1/staff?role=chef", Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let id = chef["id"].as_str().unwrap();
    let res = app.send("PUT", &format!("/api/v1/staff/{}", id), Some(&token), Some(json!({"tipo": "seguridad"}))).await;
    assert_eq!(parse_body(res).await["tipo"], "seguridad");

    let res = app.send("DELETE", &format!("/api/v1/staff/{}", id), Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.send("GET", "/api/v1/staff?role=seguridad", Some(&token), None).await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_hotel_config_defaults_and_updates() {
    let app = TestApp::new().await;
    let laura = token_for("owner-1", "Laura");
    let pedro = token_for("owner-2", "Pedro");

    let res = app.send("GET", "/api/v1/config", None, None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // First read creates the default document
    let res = app.send("GET", "/api/v1/config", Some(&laura), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let config = parse_body(res).await;
    assert_eq!(config["nombreHotel"], "Mi Hotel");
    assert_eq!(config["id"], "owner-1");

    let res = app.send("PUT", "/api/v1/config", Some(&laura), Some(json!({"nombreHotel": "Hotel Las Palmas"}))).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["nombreHotel"], "Hotel Las Palmas");

    let res = app.send("GET", "/api/v1/config", Some(&laura), None).await;
    let config = parse_body(res).await;
    assert_eq!(config["nombreHotel"], "Hotel Las Palmas");
    assert_ne!(config["updatedAt"], config["createdAt"]);

    let res = app.send("GET", "/api/v1/config", Some(&pedro), None).await;
    assert_eq!(parse_body(res).await["nombreHotel"], "Mi Hotel");

    let res = app.send("PUT", "/api/v1/config", Some(&laura), Some(json!({"nombreHotel": " "}))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
