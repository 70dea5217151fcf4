use crate::core::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment gateway trait for starting checkouts, verifying result
/// callbacks, and refunding captured transactions
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a checkout session and return the redirect URL
    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentResponse>;

    /// Authenticate and interpret a gateway result callback.
    ///
    /// `hmac_header` is the callback's `Hmac` header value; `raw_body` is
    /// the request body exactly as received on the wire. Never fails:
    /// unauthenticated or malformed callbacks yield an unsuccessful
    /// verification, not an error.
    fn verify_callback(&self, hmac_header: Option<&str>, raw_body: &str) -> CallbackVerification;

    /// Refund a captured transaction. `amount_cents` is in minor units.
    async fn refund(&self, transaction_id: &str, amount_cents: i64) -> Result<RefundResponse>;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// Payment request data.
///
/// `amount`, `first_name`, `last_name`, `email` and `phone` are required;
/// [`PaymentRequest::missing_fields`] reports absent or empty ones.
/// `user_id` and `source` are accepted for caller-interface parity but are
/// not forwarded to the gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Amount in major units (e.g. 100.50 EGP)
    pub amount: Option<Decimal>,
    pub user_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
}

impl PaymentRequest {
    pub fn new(
        amount: Decimal,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount),
            user_id: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
            source: None,
        }
    }

    /// Names of required fields that are absent or empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        fn empty(value: &Option<String>) -> bool {
            value.as_deref().map_or(true, |s| s.trim().is_empty())
        }

        let mut missing = Vec::new();
        if self.amount.is_none() {
            missing.push("amount");
        }
        if empty(&self.first_name) {
            missing.push("first_name");
        }
        if empty(&self.last_name) {
            missing.push("last_name");
        }
        if empty(&self.email) {
            missing.push("email");
        }
        if empty(&self.phone) {
            missing.push("phone");
        }
        missing
    }
}

/// Shipping/billing block sent to the gateway. Address lines Paymob
/// requires but a hosted checkout has no data for carry the literal "NA".
#[derive(Debug, Clone, Serialize)]
pub struct PartyData {
    pub apartment: String,
    pub email: String,
    pub floor: String,
    pub first_name: String,
    pub street: String,
    pub building: String,
    pub phone_number: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    pub last_name: String,
    pub state: String,
}

impl PartyData {
    const PLACEHOLDER: &'static str = "NA";

    /// Build the block from an already-validated request
    pub fn from_request(request: &PaymentRequest) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            apartment: Self::PLACEHOLDER.to_string(),
            email: field(&request.email),
            floor: Self::PLACEHOLDER.to_string(),
            first_name: field(&request.first_name),
            street: Self::PLACEHOLDER.to_string(),
            building: Self::PLACEHOLDER.to_string(),
            phone_number: field(&request.phone),
            postal_code: Self::PLACEHOLDER.to_string(),
            city: Self::PLACEHOLDER.to_string(),
            country: Self::PLACEHOLDER.to_string(),
            last_name: field(&request.last_name),
            state: Self::PLACEHOLDER.to_string(),
        }
    }
}

/// Checkout session created by the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Gateway order identifier
    pub payment_id: String,

    /// Inline markup, for integration modes that render the checkout
    /// in-page. Always empty in the iframe redirect flow.
    pub html: String,

    /// Hosted checkout URL for the customer
    pub redirect_url: String,
}

/// Outcome of authenticating and interpreting a result callback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackVerification {
    /// True only when the HMAC matched AND the gateway reported success
    pub success: bool,

    /// Gateway order identifier, when the payload carried one
    pub payment_id: Option<String>,

    /// Resolved result message
    pub message: String,

    /// The callback payload as received
    pub process_data: serde_json::Value,
}

/// Echo of a refund request. The gateway's refund response body is not
/// interpreted; callers needing provider-side confirmation must query the
/// transaction separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundResponse {
    pub transaction_id: String,
    pub amount_cents: i64,
}
