use carenet_testing::env::env_lock;

use crate::helpers::spawn_portal;

#[tokio::test]
async fn should_pass_environment_values_through_verbatim() {
    let _guard = env_lock();
    unsafe {
        std::env::set_var("ARCGIS_API_KEY", "abc123");
        std::env::set_var("ARCGIS_PORTAL_URL", "https://example.com/portal");
    }

    let server = spawn_portal().await;
    let resp = reqwest::get(server.url("/api/config")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "arcgisApiKey": "abc123",
            "arcgisPortalUrl": "https://example.com/portal",
        })
    );

    unsafe {
        std::env::remove_var("ARCGIS_API_KEY");
        std::env::remove_var("ARCGIS_PORTAL_URL");
    }
}

#[tokio::test]
async fn should_return_200_with_nulls_when_environment_unset() {
    let _guard = env_lock();
    unsafe {
        std::env::remove_var("ARCGIS_API_KEY");
        std::env::remove_var("ARCGIS_PORTAL_URL");
    }

    let server = spawn_portal().await;
    let resp = reqwest::get(server.url("/api/config")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "arcgisApiKey": null,
            "arcgisPortalUrl": null,
        })
    );
}

#[tokio::test]
async fn should_return_identical_bodies_for_repeated_requests() {
    let _guard = env_lock();
    unsafe {
        std::env::set_var("ARCGIS_API_KEY", "repeat-key");
        std::env::remove_var("ARCGIS_PORTAL_URL");
    }

    let server = spawn_portal().await;
    let first: serde_json::Value = reqwest::get(server.url("/api/config"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: serde_json::Value = reqwest::get(server.url("/api/config"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first, second);

    unsafe { std::env::remove_var("ARCGIS_API_KEY") };
}

#[tokio::test]
async fn should_allow_any_origin() {
    let _guard = env_lock();
    let server = spawn_portal().await;

    let client = reqwest::Client::new();
    let resp = client
        .get(server.url("/api/config"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
