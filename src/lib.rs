//! Paymob Accept Gateway Client
//!
//! This library provides a client for the Paymob "Accept" payment gateway:
//! hosted-checkout session creation, HMAC-signed callback verification,
//! refunds, and decline-code translation.

pub mod config;
pub mod core;
pub mod gateways;
pub mod translator;

// Re-export commonly used types
pub use crate::core::{Currency, PaymobError, Result};
pub use config::PaymobConfig;
pub use gateways::{
    CallbackVerification, PaymentGateway, PaymentRequest, PaymentResponse, PaymobClient,
    RefundResponse,
};
pub use translator::{StaticTranslator, Translator};
