use parcel_core::{Parcel, ParcelStatus, ParcelValidationError};

#[test]
fn registered_constructor_sets_defaults() {
    let parcel = Parcel::registered(1000, "Main st. 1");

    assert_eq!(parcel.number, 0);
    assert_eq!(parcel.client, 1000);
    assert_eq!(parcel.status, ParcelStatus::Registered);
    assert_eq!(parcel.address, "Main st. 1");
    assert!(parcel.validate().is_ok());
}

#[test]
fn status_text_mapping_is_lossless() {
    for text in ["registered", "sent", "delivered", "Delivered", "returned", ""] {
        let status = ParcelStatus::parse(text);
        assert_eq!(status.as_str(), text);
        assert_eq!(String::from(status.clone()), text);
        assert_eq!(ParcelStatus::from(text.to_string()), status);
    }
    assert_eq!(ParcelStatus::parse("sent"), ParcelStatus::Sent);
    assert!(ParcelStatus::parse("registered").is_registered());
    assert!(!ParcelStatus::parse("Registered").is_registered());
}

#[test]
fn status_progression_ends_at_delivered() {
    assert_eq!(ParcelStatus::Registered.next(), Some(ParcelStatus::Sent));
    assert_eq!(ParcelStatus::Sent.next(), Some(ParcelStatus::Delivered));
    assert_eq!(ParcelStatus::Delivered.next(), None);
    assert_eq!(ParcelStatus::Other("returned".to_string()).next(), None);
}

#[test]
fn parcel_serialization_uses_plain_status_strings() {
    let mut parcel = Parcel::new(
        42,
        ParcelStatus::Other("held at customs".to_string()),
        "Harbour 3",
        "2024-01-01T00:00:00Z",
    );
    parcel.number = 5;

    let json = serde_json::to_value(&parcel).unwrap();
    assert_eq!(json["number"], 5);
    assert_eq!(json["client"], 42);
    assert_eq!(json["status"], "held at customs");
    assert_eq!(json["address"], "Harbour 3");
    assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");

    let decoded: Parcel = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, parcel);

    let sent: ParcelStatus = serde_json::from_str("\"sent\"").unwrap();
    assert_eq!(sent, ParcelStatus::Sent);
}

#[test]
fn validate_accepts_iso_8601_variants() {
    for created_at in [
        "2024-01-01T00:00:00Z",
        "2024-01-01T00:00:00.123456Z",
        "2024-01-01T03:00:00+03:00",
        "2024-01-01 00:00:00",
        "2024-01-01T00:00:00+0300",
        "20240101T000000Z",
        "2024-01-01T00:00Z",
        "2024-01-01t00:00:00z",
        "2024-01-01T00:00:00,5Z",
    ] {
        let parcel = Parcel::new(1, ParcelStatus::Registered, "a", created_at);
        assert!(parcel.validate().is_ok(), "{created_at} should be accepted");
    }
}

#[test]
fn validate_rejects_malformed_created_at() {
    for created_at in ["", "2024-01-01", "01/01/2024 00:00", "2024-01-01T00:00:00Zjunk"] {
        let parcel = Parcel::new(1, ParcelStatus::Registered, "a", created_at);
        assert_eq!(
            parcel.validate().unwrap_err(),
            ParcelValidationError::InvalidCreatedAt(created_at.to_string())
        );
    }
}
