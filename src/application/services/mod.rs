/// Module containing the attachment service for uploading and downloading files
pub mod attachment_service;
/// Module containing the contact service
pub mod contact_service;
/// Module containing the customer search service
pub mod customer_service;
/// Module containing the exchange rate quote service
pub mod exchange_rate_service;
/// Module containing the invoice service
pub mod invoice_service;
/// Module containing the country and currency metadata service
pub mod meta_service;
/// Module containing the payment service
pub mod payment_service;

pub use crate::application::interfaces::attachment::*;
pub use crate::application::interfaces::contact::*;
pub use crate::application::interfaces::customer::*;
pub use crate::application::interfaces::exchange_rate::*;
pub use crate::application::interfaces::invoice::*;
pub use crate::application::interfaces::meta::*;
pub use crate::application::interfaces::payment::*;
pub use attachment_service::AttachmentServiceImpl;
pub use contact_service::ContactServiceImpl;
pub use customer_service::CustomerServiceImpl;
pub use exchange_rate_service::ExchangeRateServiceImpl;
pub use invoice_service::InvoiceServiceImpl;
pub use meta_service::MetaServiceImpl;
pub use payment_service::PaymentServiceImpl;
