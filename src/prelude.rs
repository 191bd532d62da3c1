/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # Veem Client Prelude
//!
//! Brings the client, the service traits, the request and response types
//! and the error type into scope with a single import.
//!
//! ## Usage
//!
//! ```rust
//! use veem_client::prelude::*;
//!
//! let config = Config::with_credentials("client-id", "client-secret", Environment::Sandbox);
//! assert!(config.is_sandbox());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Veem API client
pub use crate::application::config::{
    Config, Credentials, Environment, RateLimiterConfig, RestApiConfig,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{ApiError, AppError};

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Token manager
pub use crate::application::auth::Auth;

/// Access token
pub use crate::model::auth::AccessToken;

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::services::{
    AttachmentService, ContactService, CustomerService, ExchangeRateService, InvoiceService,
    MetaService, PaymentService,
};

/// Service implementations
pub use crate::application::services::{
    AttachmentServiceImpl, ContactServiceImpl, CustomerServiceImpl, ExchangeRateServiceImpl,
    InvoiceServiceImpl, MetaServiceImpl, PaymentServiceImpl,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Authenticated HTTP client
pub use crate::model::http::HttpClient;

/// Rate limiter
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// REQUESTS, RESPONSES AND PAGING
// ============================================================================

/// Query filters
pub use crate::model::filters::{Filter, QueryParams, SortOrder};

/// Paged results
pub use crate::model::pagination::{Page, PageEnvelope};

/// Create payloads
pub use crate::model::requests::{ContactFull, DraftPayment, QuoteRequest};

/// Batch and quote responses
pub use crate::model::responses::{BatchItem, BatchOperation, BatchQuoteResponse, QuoteFailure};

// ============================================================================
// DOMAIN RECORDS
// ============================================================================

pub use crate::presentation::{
    Address, Amount, Attachment, BankAccount, Contact, ContactType, CountryCurrencyMap, Customer,
    Entity, Invoice, Payment, PaymentApproval, PaymentApprovalRequest, PaymentPurpose,
    PushPaymentInfo, Quote, UserApproval,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
