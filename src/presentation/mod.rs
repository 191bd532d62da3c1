/// Attachment references
pub mod attachment;
/// Entity, amount and contact type shared by several resources
pub mod common;
/// Contacts, addresses and bank accounts
pub mod contact;
/// Customers returned by the customer search
pub mod customer;
/// Exchange rate quotes
pub mod exchange_rate;
/// Invoices
pub mod invoice;
/// Country and currency capability metadata
pub mod meta;
/// Payments and their approval records
pub mod payment;
/// Serialization utilities for API responses
pub mod serialization;

pub use attachment::Attachment;
pub use common::{Amount, ContactType, Entity};
pub use contact::{Address, BankAccount, Contact};
pub use customer::Customer;
pub use exchange_rate::Quote;
pub use invoice::Invoice;
pub use meta::{CountryCurrencyMap, PaymentPurpose};
pub use payment::{Payment, PaymentApproval, PaymentApprovalRequest, PushPaymentInfo, UserApproval};
