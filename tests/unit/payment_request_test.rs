// Validation rules for caller-supplied payment data:
// - every required field must be present and non-empty
// - all missing fields are reported together, by name
// - amounts must be positive and within the currency's scale

use paymob_gateway::{Currency, PaymentRequest};
use rust_decimal_macros::dec;

#[test]
fn test_complete_request_is_valid() {
    let request = PaymentRequest::new(
        dec!(100.50),
        "Jane",
        "Doe",
        "jane@example.com",
        "+201000000000",
    );
    assert!(request.missing_fields().is_empty());
}

#[test]
fn test_each_required_field_is_reported_when_absent() {
    let cases: [(&str, fn(&mut PaymentRequest)); 5] = [
        ("amount", |r| r.amount = None),
        ("first_name", |r| r.first_name = None),
        ("last_name", |r| r.last_name = None),
        ("email", |r| r.email = None),
        ("phone", |r| r.phone = None),
    ];

    for (field, clear) in cases {
        let mut request = PaymentRequest::new(
            dec!(10),
            "Jane",
            "Doe",
            "jane@example.com",
            "+201000000000",
        );
        clear(&mut request);
        assert_eq!(
            request.missing_fields(),
            vec![field],
            "clearing {} must report exactly that field",
            field
        );
    }
}

#[test]
fn test_blank_strings_count_as_missing() {
    let mut request =
        PaymentRequest::new(dec!(10), "Jane", "Doe", "jane@example.com", "+201000000000");
    request.first_name = Some(String::new());
    request.email = Some("   ".to_string());

    assert_eq!(request.missing_fields(), vec!["first_name", "email"]);
}

#[test]
fn test_all_missing_fields_reported_together() {
    let request = PaymentRequest::default();
    assert_eq!(
        request.missing_fields(),
        vec!["amount", "first_name", "last_name", "email", "phone"]
    );
}

#[test]
fn test_optional_fields_are_not_required() {
    let mut request =
        PaymentRequest::new(dec!(10), "Jane", "Doe", "jane@example.com", "+201000000000");
    request.user_id = None;
    request.source = None;
    assert!(request.missing_fields().is_empty());
}

#[test]
fn test_amount_rules() {
    assert!(Currency::EGP.validate_amount(dec!(100.50)).is_ok());
    assert!(Currency::EGP.validate_amount(dec!(0)).is_err());
    assert!(Currency::EGP.validate_amount(dec!(-5)).is_err());
    // Sub-cent precision is rejected rather than silently rounded
    assert!(Currency::EGP.validate_amount(dec!(1.005)).is_err());
}
