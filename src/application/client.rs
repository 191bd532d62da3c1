/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::services::{
    AttachmentServiceImpl, ContactServiceImpl, CustomerServiceImpl, ExchangeRateServiceImpl,
    InvoiceServiceImpl, MetaServiceImpl, PaymentServiceImpl,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::sync::Arc;
use tracing::info;

/// Entry point to the Veem API
///
/// All resource services share one [`HttpClient`], and with it one access
/// token and one rate limiter.
pub struct Client {
    http_client: Arc<HttpClient>,
    meta: MetaServiceImpl,
    attachments: AttachmentServiceImpl,
    contacts: ContactServiceImpl,
    customers: CustomerServiceImpl,
    exchange_rates: ExchangeRateServiceImpl,
    invoices: InvoiceServiceImpl,
    payments: PaymentServiceImpl,
}

impl Client {
    /// Creates a client and authenticates right away
    ///
    /// # Returns
    /// * `Err(AppError::Authentication)` - If the credentials are rejected
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpClient::new(config).await?;
        info!("Client ready for {}", http_client.config().rest_api.base_url);
        Ok(Self::with_http_client(Arc::new(http_client)))
    }

    /// Creates a client that authenticates on its first request
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let http_client = HttpClient::new_lazy(config)?;
        Ok(Self::with_http_client(Arc::new(http_client)))
    }

    /// Builds the services on top of an existing HTTP client
    #[must_use]
    pub fn with_http_client(http_client: Arc<HttpClient>) -> Self {
        Self {
            meta: MetaServiceImpl::new(http_client.clone()),
            attachments: AttachmentServiceImpl::new(http_client.clone()),
            contacts: ContactServiceImpl::new(http_client.clone()),
            customers: CustomerServiceImpl::new(http_client.clone()),
            exchange_rates: ExchangeRateServiceImpl::new(http_client.clone()),
            invoices: InvoiceServiceImpl::new(http_client.clone()),
            payments: PaymentServiceImpl::new(http_client.clone()),
            http_client,
        }
    }

    /// Underlying HTTP client
    #[must_use]
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Country and currency metadata
    #[must_use]
    pub fn meta(&self) -> &MetaServiceImpl {
        &self.meta
    }

    /// Attachment upload and download
    #[must_use]
    pub fn attachments(&self) -> &AttachmentServiceImpl {
        &self.attachments
    }

    /// Contacts
    #[must_use]
    pub fn contacts(&self) -> &ContactServiceImpl {
        &self.contacts
    }

    /// Customer search
    #[must_use]
    pub fn customers(&self) -> &CustomerServiceImpl {
        &self.customers
    }

    /// Exchange rate quotes
    #[must_use]
    pub fn exchange_rates(&self) -> &ExchangeRateServiceImpl {
        &self.exchange_rates
    }

    /// Invoices
    #[must_use]
    pub fn invoices(&self) -> &InvoiceServiceImpl {
        &self.invoices
    }

    /// Payments
    #[must_use]
    pub fn payments(&self) -> &PaymentServiceImpl {
        &self.payments
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("http_client", &self.http_client)
            .finish()
    }
}
