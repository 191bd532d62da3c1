/// Attachment service interface
pub mod attachment;
/// Contact service interface
pub mod contact;
/// Customer service interface
pub mod customer;
/// Exchange rate service interface
pub mod exchange_rate;
/// Invoice service interface
pub mod invoice;
/// Metadata service interface
pub mod meta;
/// Payment service interface
pub mod payment;
