//! Integration tests for the API client using wiremock mock server

use sm_client::{ApiClient, ClientError};
use sm_core::AppointmentStatus;

use serde_json::json;
use uuid::Uuid;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path, query_param},
};

const APT_ID: &str = "00000000-0000-0000-0000-000000000001";
const CUSTOMER_ID: &str = "00000000-0000-0000-0000-000000000002";
const VEHICLE_ID: &str = "00000000-0000-0000-0000-000000000003";

fn appointment_json(status: &str, position: i32, version: i32) -> serde_json::Value {
    json!({
        "id": APT_ID,
        "customer_id": CUSTOMER_ID,
        "vehicle_id": VEHICLE_ID,
        "customer_name": "Dana Alvarez",
        "vehicle_info": "2019 Toyota Camry (ABC-123)",
        "service_summary": "Oil change",
        "status": status,
        "position": position,
        "version": version,
        "start_time": 1704067200,
        "end_time": null,
        "technician_id": null,
        "notes": null,
        "total_cents": 4999,
        "created_at": 1704067200,
        "updated_at": 1704067200
    })
}

#[tokio::test]
async fn test_get_appointment_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/appointments/{}", APT_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "appointment": appointment_json("scheduled", 1, 1)
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let appointment = client
        .get_appointment(Uuid::parse_str(APT_ID).unwrap())
        .await
        .unwrap();

    assert_eq!(appointment.customer_name, "Dana Alvarez");
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.version, 1);
}

#[tokio::test]
async fn test_get_appointment_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/appointments/{}", APT_ID)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "NOT_FOUND",
                "message": "Appointment not found"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let result = client.get_appointment(Uuid::parse_str(APT_ID).unwrap()).await;

    assert!(matches!(result, Err(ClientError::NotFound { .. })));
}

#[tokio::test]
async fn test_move_appointment_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/appointments/{}", APT_ID)))
        .and(body_string_contains("in_progress"))
        .and(body_string_contains("expected_version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "appointment": appointment_json("in_progress", 1, 2)
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let appointment = client
        .move_appointment(
            Uuid::parse_str(APT_ID).unwrap(),
            AppointmentStatus::InProgress,
            1,
            1,
        )
        .await
        .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::InProgress);
    assert_eq!(appointment.version, 2);
}

#[tokio::test]
async fn test_move_appointment_conflict_carries_current_version() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/appointments/{}", APT_ID)))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": {
                "code": "CONFLICT",
                "message": "Version mismatch - appointment was modified by another user",
                "current_version": 5
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let result = client
        .move_appointment(
            Uuid::parse_str(APT_ID).unwrap(),
            AppointmentStatus::Ready,
            0,
            999,
        )
        .await;

    match result {
        Err(ClientError::Conflict {
            current_version, ..
        }) => assert_eq!(current_version, Some(5)),
        other => panic!("expected conflict, got {:?}", other.map(|a| a.status)),
    }
}

#[tokio::test]
async fn test_fetch_board_with_technician_filter() {
    let mock_server = MockServer::start().await;
    let tech_id = "00000000-0000-0000-0000-000000000009";

    Mock::given(method("GET"))
        .and(path("/api/v1/board"))
        .and(query_param("technician_id", tech_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "appointments": [appointment_json("ready", 1, 3)]
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let appointments = client
        .fetch_board(Some(Uuid::parse_str(tech_id).unwrap()))
        .await
        .unwrap();

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].status, AppointmentStatus::Ready);
}

#[tokio::test]
async fn test_fetch_board_rejects_unknown_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/board"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "appointments": [appointment_json("SCHEDULED", 1, 1)]
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let result = client.fetch_board(None).await;

    // Legacy uppercase vocabulary is rejected at the boundary, not deep in the UI
    assert!(matches!(result, Err(ClientError::Payload { .. })));
}

#[tokio::test]
async fn test_send_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v1/appointments/{}/messages", APT_ID)))
        .and(body_string_contains("Your car is ready"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": {
                "id": "00000000-0000-0000-0000-000000000004",
                "appointment_id": APT_ID,
                "direction": "outbound",
                "body": "Your car is ready",
                "sent_at": 1704067200
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let message = client
        .send_message(Uuid::parse_str(APT_ID).unwrap(), "Your car is ready")
        .await
        .unwrap();

    assert_eq!(message.body, "Your car is ready");
}

#[tokio::test]
async fn test_create_customer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/customers"))
        .and(body_string_contains("Dana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer": {
                "id": CUSTOMER_ID,
                "first_name": "Dana",
                "last_name": "Alvarez",
                "phone": "555-0101",
                "email": null,
                "created_at": 1704067200,
                "updated_at": 1704067200
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let customer = client
        .create_customer("Dana", "Alvarez", "555-0101", None)
        .await
        .unwrap();

    assert_eq!(customer.full_name(), "Dana Alvarez");
}

#[tokio::test]
async fn test_customer_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/customers/{}/history", CUSTOMER_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "history": [
                {
                    "appointment_id": APT_ID,
                    "start_time": 1704067200,
                    "status": "completed",
                    "total_cents": 12999,
                    "services": ["Brake pads", "Rotors"]
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let history = client
        .customer_history(Uuid::parse_str(CUSTOMER_ID).unwrap())
        .await
        .unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].services, vec!["Brake pads", "Rotors"]);
}

#[tokio::test]
async fn test_delete_appointment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/v1/appointments/{}", APT_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deleted_id": APT_ID
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let result = client
        .delete_appointment(Uuid::parse_str(APT_ID).unwrap())
        .await
        .unwrap();

    assert_eq!(result["deleted_id"], APT_ID);
}

#[tokio::test]
async fn test_list_templates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "templates": [
                {
                    "id": "00000000-0000-0000-0000-000000000007",
                    "name": "ready-for-pickup",
                    "body": "Hi {customer_name}, your {vehicle_info} is ready."
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let templates = client.list_templates().await.unwrap();

    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].name, "ready-for-pickup");
}
