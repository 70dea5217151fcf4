// Decline-code translation: every mapped gateway code resolves to its
// designated message, everything else (unknown, empty, absent) falls
// through to the generic one, and the lookup never fails.

use paymob_gateway::gateways::paymob::decline_reason_key;
use paymob_gateway::translator::{keys, StaticTranslator, Translator};
use paymob_gateway::{Currency, PaymobClient, PaymobConfig};
use proptest::prelude::*;
use std::sync::Arc;

fn client() -> PaymobClient {
    PaymobClient::new(
        PaymobConfig::new("api_key", "1001", "2002", "hmac_secret", Currency::EGP),
        Arc::new(StaticTranslator),
    )
}

#[test]
fn test_mapped_codes_resolve_to_their_reason() {
    let cases = [
        ("BLOCKED", keys::PROCESS_BLOCKED),
        ("B", keys::PROCESS_BLOCKED),
        ("5", keys::INSUFFICIENT_BALANCE),
        ("6051", keys::INSUFFICIENT_BALANCE),
        ("F", keys::NOT_AUTHORIZED_3D_SECURE),
        ("7", keys::INCORRECT_EXPIRY),
        ("2", keys::DECLINED),
        ("637", keys::INCORRECT_OTP),
        ("11", keys::SECURITY_CHECKS_FAILED),
    ];

    for (code, expected_key) in cases {
        assert_eq!(
            decline_reason_key(Some(code)),
            expected_key,
            "code {:?} must map to {}",
            code,
            expected_key
        );
    }
}

#[test]
fn test_unmapped_codes_fall_through_to_generic() {
    for code in ["APPROVED", "999", "", "blocked"] {
        assert_eq!(
            decline_reason_key(Some(code)),
            keys::OPERATION_FAILED,
            "code {:?} must use the generic fallback",
            code
        );
    }
    assert_eq!(decline_reason_key(None), keys::OPERATION_FAILED);
}

#[test]
fn test_lookup_is_case_sensitive_like_the_gateway() {
    // "B" is blocked-by-system; lowercase "b" is not a gateway code
    assert_eq!(decline_reason_key(Some("B")), keys::PROCESS_BLOCKED);
    assert_eq!(decline_reason_key(Some("b")), keys::OPERATION_FAILED);
}

#[test]
fn test_client_renders_decline_messages() {
    let client = client();

    assert_eq!(
        client.decline_message(Some("F")),
        "The card is not authorized with 3-D Secure"
    );
    assert_eq!(
        client.decline_message(None),
        "An error occurred while executing the operation"
    );
}

#[test]
fn test_every_reason_key_has_a_catalog_entry() {
    let reason_keys = [
        keys::PROCESS_BLOCKED,
        keys::INSUFFICIENT_BALANCE,
        keys::NOT_AUTHORIZED_3D_SECURE,
        keys::INCORRECT_EXPIRY,
        keys::DECLINED,
        keys::INCORRECT_OTP,
        keys::SECURITY_CHECKS_FAILED,
        keys::OPERATION_FAILED,
    ];

    for key in reason_keys {
        let rendered = StaticTranslator.resolve(key, &[]);
        // A key resolving to itself means the catalog has no entry for it
        assert_ne!(rendered, key, "catalog entry missing for {}", key);
    }
}

proptest! {
    #[test]
    fn test_lookup_is_total_over_arbitrary_codes(code in ".*") {
        let message = client().decline_message(Some(&code));
        prop_assert!(!message.is_empty(), "code {:?} produced an empty message", code);
    }
}
