//! API integration tests
//!
//! These tests run against a live server with the default bootstrap
//! superadmin account. Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8000/api";

/// Helper to get an authenticated superadmin token
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@universidad.edu",
            "password": "admin123"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["access_token"]
        .as_str()
        .expect("No token in response")
        .to_string()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@universidad.edu",
            "password": "admin123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["access_token"].is_string());
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["role"], "superadmin");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@universidad.edu",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_get_current_user() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], "admin@universidad.edu");
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_create_duplicate_serial_and_delete_equipment() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let serial = format!("TEST-{}", uuid_like());
    let payload = json!({
        "ubicacion": "Edificio de Pruebas - 1 - 101",
        "resguardante": "Resguardante de Prueba",
        "departamento": "Departamento de Pruebas",
        "tipo_bien": "computadora",
        "numero_serie": serial,
        "marca": "Dell",
        "modelo": "Latitude 5420",
        "fecha_adquisicion": "2023-05-10",
        "estado_operativo": "disponible"
    });

    // Create equipment
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let equipment_id = body["id"].as_str().expect("No equipment ID").to_string();

    // A second record with the same serial number must be rejected
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    // History carries the created entry
    let response = client
        .get(format!("{}/history/{}", BASE_URL, equipment_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    let history: Value = response.json().await.expect("Failed to parse response");
    assert!(history
        .as_array()
        .expect("History is not an array")
        .iter()
        .any(|e| e["action"] == "created"));

    // Cleanup: delete the record
    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_department_worker_count_invariant() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    // Create a location to attach the department to
    let response = client
        .post(format!("{}/locations", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "edificio": format!("Edificio {}", uuid_like()),
            "piso": "1",
            "salon_aula": "101"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let location: Value = response.json().await.expect("Failed to parse response");
    let location_id = location["id"].as_str().expect("No location ID").to_string();

    // Declared count 3 with only 2 workers must be rejected
    let response = client
        .post(format!("{}/departments", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "nombre": format!("Departamento {}", uuid_like()),
            "ubicacion_id": location_id,
            "numero_trabajadores": 3,
            "trabajadores": [
                {"nombre_completo": "Ana Pérez", "puesto": "Analista", "numero_trabajador": "T-0001"},
                {"nombre_completo": "Luis Gómez", "puesto": "Técnico", "numero_trabajador": "T-0002"}
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    // Cleanup: the location has no references and can be removed
    let response = client
        .delete(format!("{}/locations/{}", BASE_URL, location_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_dashboard_totals_reconcile() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let stats: Value = response.json().await.expect("Failed to parse response");
    let total = stats["total_equipment"].as_i64().expect("No total");
    let by_status: i64 = stats["by_status"]
        .as_object()
        .expect("by_status is not a map")
        .values()
        .map(|v| v.as_i64().unwrap_or(0))
        .sum();
    assert_eq!(by_status, total);

    let response = client
        .get(format!("{}/dashboard/equipment-by-department", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let groups: Value = response.json().await.expect("Failed to parse response");
    let group_total: i64 = groups
        .as_array()
        .expect("Groups is not an array")
        .iter()
        .map(|g| g["total"].as_i64().unwrap_or(0))
        .sum();
    assert_eq!(group_total, total);
}

/// Pseudo-unique suffix so repeated runs do not collide
fn uuid_like() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    format!(
        "{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    )
}
