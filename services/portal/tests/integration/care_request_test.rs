use carenet_testing::fixture::care_request_body;

use crate::helpers::spawn_portal;

#[tokio::test]
async fn should_create_and_retrieve_care_request() {
    let server = spawn_portal().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/api/care-requests"))
        .json(&care_request_body())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    let created: serde_json::Value = resp.json().await.unwrap();
    let id = created["id"].as_str().unwrap();

    let resp = client
        .get(server.url(&format!("/api/care-requests/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["id"], id);
    assert_eq!(body["requester_name"], "Li Wei");
    assert_eq!(body["service_type"], "Medical Checkup");
    assert_eq!(body["urgency"], "Normal");
    assert_eq!(body["status"], "Pending");
}

#[tokio::test]
async fn should_list_submitted_requests_in_order() {
    let server = spawn_portal().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let resp = client
            .post(server.url("/api/care-requests"))
            .json(&care_request_body())
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 201);
    }

    let body: serde_json::Value = client
        .get(server.url("/api/care-requests"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_return_404_for_unknown_request_id() {
    let server = spawn_portal().await;

    let resp = reqwest::get(server.url(
        "/api/care-requests/00000000-0000-0000-0000-000000000000",
    ))
    .await
    .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["kind"], "REQUEST_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_unknown_service_type() {
    let server = spawn_portal().await;
    let client = reqwest::Client::new();

    let mut body = care_request_body();
    body["service_type"] = "Dog Walking".into();

    let resp = client
        .post(server.url("/api/care-requests"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn should_accept_missing_description() {
    let server = spawn_portal().await;
    let client = reqwest::Client::new();

    let mut body = care_request_body();
    body.as_object_mut().unwrap().remove("description");

    let resp = client
        .post(server.url("/api/care-requests"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);
}
