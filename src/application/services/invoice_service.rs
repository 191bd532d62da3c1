use crate::application::interfaces::invoice::InvoiceService;
use crate::constants::API_PREFIX;
use crate::error::AppError;
use crate::model::filters::QueryParams;
use crate::model::http::HttpClient;
use crate::presentation::invoice::Invoice;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the invoice service
pub struct InvoiceServiceImpl {
    client: Arc<HttpClient>,
}

impl InvoiceServiceImpl {
    /// Creates a new instance of the invoice service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InvoiceService for InvoiceServiceImpl {
    async fn create(&self, invoice: &Invoice) -> Result<Invoice, AppError> {
        info!("Creating invoice");
        let created: Invoice = self
            .client
            .post(&format!("{API_PREFIX}/invoices"), &QueryParams::new(), invoice)
            .await?;
        debug!("Invoice created with id {:?}", created.id);
        Ok(created)
    }

    async fn get(&self, id: i64) -> Result<Invoice, AppError> {
        debug!("Getting invoice {}", id);
        self.client
            .get(&format!("{API_PREFIX}/invoices/{id}"), &QueryParams::new())
            .await
    }

    async fn cancel(&self, id: i64) -> Result<Invoice, AppError> {
        info!("Cancelling invoice {}", id);
        self.client
            .post_empty(&format!("{API_PREFIX}/invoices/{id}/cancel"))
            .await
    }
}
