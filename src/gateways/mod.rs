pub mod gateway_trait;
pub mod paymob;

pub use gateway_trait::{
    CallbackVerification, PartyData, PaymentGateway, PaymentRequest, PaymentResponse,
    RefundResponse,
};
pub use paymob::PaymobClient;
