use std::net::SocketAddr;
use std::sync::Arc;

use cafe_api_mock::Store;
use serde_json::{Value, json};

async fn start() -> (reqwest::Client, String) {
    let (addr, _handle): (SocketAddr, _) = cafe_api_mock::spawn(Arc::new(Store::new()))
        .await
        .unwrap();
    (reqwest::Client::new(), format!("http://{addr}"))
}

async fn create_cafe(client: &reqwest::Client, base: &str, name: &str, location: &str) -> Value {
    client
        .post(format!("{base}/cafes"))
        .json(&json!({ "name": name, "location": location }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_cafe_crud_over_http() {
    let (client, base) = start().await;

    let cafe = create_cafe(&client, &base, "Cafe ABC", "Orchard").await;
    let id = cafe["id"].as_str().unwrap().to_string();
    assert_eq!(cafe["employees"], 0);

    let updated: Value = client
        .put(format!("{base}/cafes"))
        .json(&json!({ "id": id, "name": "Cafe ABCD", "location": "Bugis" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["location"], "Bugis");

    let filtered: Vec<Value> = client
        .get(format!("{base}/cafes?location=Orchard"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(filtered.is_empty());

    let status = client
        .delete(format!("{base}/cafes/{id}"))
        .send()
        .await
        .unwrap()
        .status();
    assert!(status.is_success());

    let missing = client
        .delete(format!("{base}/cafes/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = missing.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_empty_location_means_unfiltered() {
    let (client, base) = start().await;
    create_cafe(&client, &base, "Cafe ABC", "Orchard").await;
    create_cafe(&client, &base, "Cafe XYZ", "Tampines").await;

    let all: Vec<Value> = client
        .get(format!("{base}/cafes?location="))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_employee_status_codes() {
    let (client, base) = start().await;
    let cafe = create_cafe(&client, &base, "Cafe ABC", "Orchard").await;

    let body = json!({
        "id": "UIAB123",
        "name": "Alice",
        "emailAddress": "alice@example.com",
        "phoneNumber": "91234567",
        "gender": "Female",
        "startDate": "2024-01-10",
        "cafeId": cafe["id"],
    });
    let created = client
        .post(format!("{base}/employees"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert!(created.status().is_success());
    let created: Value = created.json().await.unwrap();
    assert_eq!(created["cafeName"], "Cafe ABC");

    let duplicate = client
        .post(format!("{base}/employees"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), reqwest::StatusCode::CONFLICT);

    let mut bad_cafe = body.clone();
    bad_cafe["id"] = json!("UICD456");
    bad_cafe["cafeId"] = json!("no-such-cafe");
    let rejected = client
        .post(format!("{base}/employees"))
        .json(&bad_cafe)
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), reqwest::StatusCode::BAD_REQUEST);

    let by_cafe: Vec<Value> = client
        .get(format!("{base}/employees?cafe=Cafe%20ABC"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_cafe.len(), 1);

    let unknown = client
        .get(format!("{base}/employees/UIZZ999"))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), reqwest::StatusCode::NOT_FOUND);
}
