use crate::{Message, MessageDirection};

use std::str::FromStr;

use uuid::Uuid;

#[test]
fn test_message_direction_round_trip() {
    assert_eq!(
        MessageDirection::from_str("inbound").unwrap(),
        MessageDirection::Inbound
    );
    assert_eq!(
        MessageDirection::from_str("outbound").unwrap(),
        MessageDirection::Outbound
    );
    assert!(MessageDirection::from_str("sideways").is_err());
}

#[test]
fn test_message_new_sets_direction_and_body() {
    let appointment_id = Uuid::new_v4();
    let message = Message::new(
        appointment_id,
        MessageDirection::Outbound,
        "Your car is ready".to_string(),
    );

    assert_eq!(message.appointment_id, appointment_id);
    assert_eq!(message.direction, MessageDirection::Outbound);
    assert_eq!(message.body, "Your car is ready");
}
