use carenet_kiosk::form::{CareRequestForm, REQUIRED_FIELDS, SubmitOutcome};

use crate::helpers::{spawn_portal, unreachable_base_url};

fn filled_form() -> CareRequestForm {
    let mut form = CareRequestForm::default();
    form.set("requester_name", "Li Wei");
    form.set("patient_name", "Li Na");
    form.set("address", "12 Changjiang Rd, Hefei");
    form.set("service_type", "Medical Checkup");
    form.set("urgency", "Normal");
    form.set("description", "Routine checkup");
    form
}

#[tokio::test]
async fn should_reset_every_field_after_successful_submit() {
    let server = spawn_portal().await;
    let client = reqwest::Client::new();

    let mut form = filled_form();
    let outcome = form.submit(&client, &server.base_url).await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(form, CareRequestForm::default());

    // The portal actually stored the request.
    let body: serde_json::Value = client
        .get(format!("{}/api/care-requests", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["patient_name"], "Li Na");
}

#[tokio::test]
async fn should_preserve_fields_when_server_rejects() {
    let server = spawn_portal().await;
    let client = reqwest::Client::new();

    // The portal rejects values outside the closed service list.
    let mut form = filled_form();
    form.set("service_type", "Dog Walking");
    let before = form.clone();

    let outcome = form.submit(&client, &server.base_url).await;

    assert!(matches!(outcome, SubmitOutcome::Rejected { status } if (400..500).contains(&status)));
    assert_eq!(form, before);
}

#[tokio::test]
async fn should_preserve_fields_on_transport_error() {
    let base_url = unreachable_base_url().await;
    let client = reqwest::Client::new();

    let mut form = filled_form();
    let before = form.clone();

    let outcome = form.submit(&client, &base_url).await;

    assert_eq!(outcome, SubmitOutcome::TransportFailed);
    assert_eq!(form, before);
    assert_ne!(
        outcome.notice(),
        SubmitOutcome::Rejected { status: 500 }.notice()
    );
}

#[tokio::test]
async fn should_flag_incomplete_form_before_submit() {
    let mut form = CareRequestForm::default();
    form.set("description", "only the optional field");

    assert!(!form.is_complete());
    assert_eq!(form.missing_required(), REQUIRED_FIELDS.to_vec());
}
