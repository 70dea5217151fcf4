//! Message resolution for gateway results.
//!
//! The client never hardcodes user-facing text: every result message is
//! produced by resolving a key through an injected [`Translator`], so
//! applications can plug in their own localization backend.

/// Message keys resolved through a [`Translator`]
pub mod keys {
    pub const PAYMENT_DONE: &str = "PAYMENT_DONE";
    pub const PAYMENT_FAILED: &str = "PAYMENT_FAILED";
    /// Takes a `code` parameter carrying the resolved decline reason
    pub const PAYMENT_FAILED_WITH_CODE: &str = "PAYMENT_FAILED_WITH_CODE";

    // Decline reasons (see PaymobClient::decline_message)
    pub const PROCESS_BLOCKED: &str = "PROCESS_BLOCKED";
    pub const INSUFFICIENT_BALANCE: &str = "INSUFFICIENT_BALANCE";
    pub const NOT_AUTHORIZED_3D_SECURE: &str = "NOT_AUTHORIZED_3D_SECURE";
    pub const INCORRECT_EXPIRY: &str = "INCORRECT_EXPIRY";
    pub const DECLINED: &str = "DECLINED";
    pub const INCORRECT_OTP: &str = "INCORRECT_OTP";
    pub const SECURITY_CHECKS_FAILED: &str = "SECURITY_CHECKS_FAILED";
    pub const OPERATION_FAILED: &str = "OPERATION_FAILED";
}

/// Resolves a message key and parameters to a rendered string
pub trait Translator: Send + Sync {
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String;
}

/// Built-in English catalog with `{param}` substitution.
///
/// Unknown keys resolve to the key itself, so lookups are total.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTranslator;

impl StaticTranslator {
    fn template(key: &str) -> &str {
        match key {
            keys::PAYMENT_DONE => "Payment completed successfully",
            keys::PAYMENT_FAILED => "Payment failed",
            keys::PAYMENT_FAILED_WITH_CODE => "Payment failed: {code}",
            keys::PROCESS_BLOCKED => "The operation has been blocked by the payment system",
            keys::INSUFFICIENT_BALANCE => "The card balance is not enough",
            keys::NOT_AUTHORIZED_3D_SECURE => "The card is not authorized with 3-D Secure",
            keys::INCORRECT_EXPIRY => "Incorrect card expiration date",
            keys::DECLINED => "The transaction was declined",
            keys::INCORRECT_OTP => "The OTP number was entered incorrectly",
            keys::SECURITY_CHECKS_FAILED => "The transaction did not pass the security checks",
            keys::OPERATION_FAILED => "An error occurred while executing the operation",
            other => other,
        }
    }
}

impl Translator for StaticTranslator {
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut message = Self::template(key).to_string();
        for (name, value) in params {
            message = message.replace(&format!("{{{}}}", name), value);
        }
        message
    }
}
