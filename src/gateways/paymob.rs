use super::gateway_trait::{
    CallbackVerification, PartyData, PaymentGateway, PaymentRequest, PaymentResponse,
    RefundResponse,
};
use crate::config::PaymobConfig;
use crate::core::{PaymobError, Result};
use crate::translator::{keys, Translator};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::Client;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use sha2::Sha512;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

type HmacSha512 = Hmac<Sha512>;

const ACCEPT_API_BASE: &str = "https://accept.paymob.com/api";
const LEGACY_API_BASE: &str = "https://accept.paymobsolutions.com/api";
const IFRAME_BASE: &str = "https://accept.paymobsolutions.com/api/acceptance/iframes";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Paymob Accept payment gateway client
///
/// Checkout is a two-step sequence: a payment intention is created first,
/// then its token authorizes a payment-key request whose token is embedded
/// in the hosted iframe URL. Result callbacks are authenticated with
/// HMAC-SHA512 over the raw callback body.
/// API Documentation: https://docs.paymob.com/docs/accept-standard-redirect
pub struct PaymobClient {
    client: Client,
    config: PaymobConfig,
    translator: Arc<dyn Translator>,
    api_base: String,
    auth_base: String,
    iframe_base: String,
}

impl PaymobClient {
    /// Create a new Paymob client.
    ///
    /// Performs no I/O; configuration values are used as-is and invalid
    /// credentials only surface on the first gateway call.
    pub fn new(config: PaymobConfig, translator: Arc<dyn Translator>) -> Self {
        Self {
            client: Client::new(),
            config,
            translator,
            api_base: ACCEPT_API_BASE.to_string(),
            auth_base: LEGACY_API_BASE.to_string(),
            iframe_base: IFRAME_BASE.to_string(),
        }
    }

    /// Point the API endpoints (intention, payment keys, auth tokens,
    /// refund) at a different host, e.g. a sandbox or a test stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        self.auth_base = base.clone();
        self.api_base = base;
        self
    }

    /// Override the hosted-iframe base URL
    pub fn with_iframe_base(mut self, iframe_base: impl Into<String>) -> Self {
        self.iframe_base = iframe_base.into();
        self
    }

    /// Resolve a gateway decline code to a user-facing message
    pub fn decline_message(&self, code: Option<&str>) -> String {
        self.translator.resolve(decline_reason_key(code), &[])
    }

    /// Constant-time check of a callback signature against the raw body.
    /// An undecodable hex signature is a mismatch, not an error.
    fn signature_matches(&self, provided_hex: &str, body: &[u8]) -> bool {
        let provided = match hex::decode(provided_hex.trim()) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };

        // HMAC accepts keys of any length, so this cannot fail
        let mut mac = match HmacSha512::new_from_slice(self.config.hmac_secret.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => return false,
        };
        mac.update(body);
        mac.verify_slice(&provided).is_ok()
    }

    async fn post_json(&self, url: &str, body: &Value, operation: &str) -> Result<Value> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .timeout(DEFAULT_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    PaymobError::gateway(format!(
                        "Paymob gateway unavailable during {}: {} ({})",
                        operation,
                        if e.is_timeout() {
                            "timeout"
                        } else {
                            "connection failed"
                        },
                        e
                    ))
                } else {
                    PaymobError::gateway(format!("Paymob {} request failed: {}", operation, e))
                }
            })?;

        let status = response.status();
        let response_body = response.text().await.map_err(|e| {
            PaymobError::gateway(format!("Failed to read Paymob {} response: {}", operation, e))
        })?;

        if !status.is_success() {
            return Err(PaymobError::gateway(format!(
                "Paymob {} error - HTTP {} ({})",
                operation,
                status.as_u16(),
                response_body
            )));
        }

        serde_json::from_str(&response_body).map_err(|e| {
            PaymobError::gateway(format!("Failed to parse Paymob {} response: {}", operation, e))
        })
    }
}

#[async_trait]
impl PaymentGateway for PaymobClient {
    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(PaymobError::missing_fields(missing));
        }

        let amount = request
            .amount
            .ok_or_else(|| PaymobError::missing_fields(["amount"]))?;
        self.config
            .currency
            .validate_amount(amount)
            .map_err(|e| PaymobError::validation(e))?;
        let amount_cents = to_minor_units(amount)?;

        let party = serde_json::to_value(PartyData::from_request(request))?;
        let intention_body = json!({
            "api_key": self.config.api_key,
            "amount_cents": amount_cents,
            "currency": self.config.currency,
            "delivery_needed": false,
            "items": [],
            "shipping_data": party.clone(),
            "billing_data": party.clone(),
        });

        let intention = self
            .post_json(
                &format!("{}/acceptance/intention/create", self.api_base),
                &intention_body,
                "intention create",
            )
            .await?;

        let order_id = intention.get("id").and_then(json_id).ok_or_else(|| {
            PaymobError::gateway("Paymob intention create failed: response missing 'id'")
        })?;
        let auth_token = intention
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                PaymobError::gateway("Paymob intention create failed: response missing 'token'")
            })?;

        info!(gateway = self.name(), order_id = %order_id, "payment intention created");

        let key_body = json!({
            "auth_token": auth_token,
            "amount_cents": amount_cents,
            "currency": self.config.currency,
            "integration_id": self.config.integration_id,
            "order_id": order_id,
            "billing_data": party,
        });

        let payment_key = self
            .post_json(
                &format!("{}/acceptance/payment_keys", self.api_base),
                &key_body,
                "payment key create",
            )
            .await?;

        let payment_token = payment_key
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                PaymobError::gateway("Paymob payment key create failed: response missing 'token'")
            })?;

        info!(gateway = self.name(), order_id = %order_id, "payment key obtained");

        Ok(PaymentResponse {
            payment_id: order_id,
            html: String::new(),
            redirect_url: format!(
                "{}/{}?payment_token={}",
                self.iframe_base, self.config.iframe_id, payment_token
            ),
        })
    }

    fn verify_callback(&self, hmac_header: Option<&str>, raw_body: &str) -> CallbackVerification {
        // Hostile payloads must still produce a structured result, so a
        // non-JSON body degrades to Null for field extraction. The HMAC is
        // always computed over the raw bytes as received.
        let payload: Value = serde_json::from_str(raw_body).unwrap_or(Value::Null);
        let payment_id = payload.pointer("/order/id").and_then(json_id);

        let authentic = hmac_header
            .map(|signature| self.signature_matches(signature, raw_body.as_bytes()))
            .unwrap_or(false);

        if !authentic {
            warn!(
                gateway = self.name(),
                payment_id = payment_id.as_deref().unwrap_or("unknown"),
                "callback rejected: HMAC mismatch"
            );
            return CallbackVerification {
                success: false,
                payment_id,
                message: self.translator.resolve(keys::PAYMENT_FAILED, &[]),
                process_data: payload,
            };
        }

        if is_truthy(payload.get("success")) {
            info!(
                gateway = self.name(),
                payment_id = payment_id.as_deref().unwrap_or("unknown"),
                "callback verified: payment succeeded"
            );
            CallbackVerification {
                success: true,
                payment_id,
                message: self.translator.resolve(keys::PAYMENT_DONE, &[]),
                process_data: payload,
            }
        } else {
            let code = payload.pointer("/data/txn_response_code").and_then(json_id);
            let reason = self.decline_message(code.as_deref());
            info!(
                gateway = self.name(),
                payment_id = payment_id.as_deref().unwrap_or("unknown"),
                code = code.as_deref().unwrap_or("none"),
                "callback verified: payment declined"
            );
            CallbackVerification {
                success: false,
                payment_id,
                message: self
                    .translator
                    .resolve(keys::PAYMENT_FAILED_WITH_CODE, &[("code", &reason)]),
                process_data: payload,
            }
        }
    }

    async fn refund(&self, transaction_id: &str, amount_cents: i64) -> Result<RefundResponse> {
        // Every refund re-authenticates; auth tokens are never cached
        let auth = self
            .post_json(
                &format!("{}/auth/tokens", self.auth_base),
                &json!({ "api_key": self.config.api_key }),
                "auth token",
            )
            .await?;

        let auth_token = auth.get("token").and_then(Value::as_str).ok_or_else(|| {
            PaymobError::gateway("Paymob auth token request failed: response missing 'token'")
        })?;

        // The refund response body carries no contract this client relies
        // on; the caller gets an echo of the inputs
        self.post_json(
            &format!("{}/acceptance/void_refund/refund", self.api_base),
            &json!({
                "auth_token": auth_token,
                "transaction_id": transaction_id,
                "amount_cents": amount_cents,
            }),
            "refund",
        )
        .await?;

        info!(
            gateway = self.name(),
            transaction_id, amount_cents, "refund submitted"
        );

        Ok(RefundResponse {
            transaction_id: transaction_id.to_string(),
            amount_cents,
        })
    }

    fn name(&self) -> &str {
        "paymob"
    }
}

/// Map a gateway decline code to its message key. Total: unknown or absent
/// codes fall through to the generic operation-failed key.
pub fn decline_reason_key(code: Option<&str>) -> &'static str {
    match code {
        Some("BLOCKED") | Some("B") => keys::PROCESS_BLOCKED,
        Some("5") | Some("6051") => keys::INSUFFICIENT_BALANCE,
        Some("F") => keys::NOT_AUTHORIZED_3D_SECURE,
        Some("7") => keys::INCORRECT_EXPIRY,
        Some("2") => keys::DECLINED,
        Some("637") => keys::INCORRECT_OTP,
        Some("11") => keys::SECURITY_CHECKS_FAILED,
        _ => keys::OPERATION_FAILED,
    }
}

/// Convert a major-unit amount to gateway minor units (cents)
fn to_minor_units(amount: Decimal) -> Result<i64> {
    (amount * Decimal::from(100))
        .round()
        .to_i64()
        .ok_or_else(|| PaymobError::validation(format!("amount out of range: {}", amount)))
}

/// Extract an id that the gateway may send as a JSON string or number
fn json_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Loose success check matching the gateway's callback variants:
/// boolean `true`, `"true"`, `"1"`, or a nonzero number
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true") || s == "1",
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0),
        _ => false,
    }
}
