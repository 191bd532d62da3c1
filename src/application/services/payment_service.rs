/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::interfaces::payment::PaymentService;
use crate::constants::API_PREFIX;
use crate::error::AppError;
use crate::model::filters::{Filter, QueryParams};
use crate::model::http::HttpClient;
use crate::model::pagination::Page;
use crate::model::requests::DraftPayment;
use crate::model::responses::BatchOperation;
use crate::presentation::payment::Payment;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the payment service
pub struct PaymentServiceImpl {
    client: Arc<HttpClient>,
}

impl PaymentServiceImpl {
    /// Creates a new instance of the payment service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn path(suffix: &str) -> String {
        format!("{API_PREFIX}/payments{suffix}")
    }

    async fn action(&self, id: i64, action: &str) -> Result<Payment, AppError> {
        info!("Requesting {} of payment {}", action, id);
        let payment: Payment = self
            .client
            .post_empty(&Self::path(&format!("/{id}/{action}")))
            .await?;
        debug!("Payment {} is now {}", payment.id, payment.status);
        Ok(payment)
    }
}

#[async_trait]
impl PaymentService for PaymentServiceImpl {
    async fn get(&self, id: i64) -> Result<Payment, AppError> {
        debug!("Getting payment {}", id);
        self.client
            .get(&Self::path(&format!("/{id}")), &QueryParams::new())
            .await
    }

    async fn list(&self, filters: &[Filter]) -> Result<Page<Payment>, AppError> {
        info!("Listing payments with {} filters", filters.len());
        let page: Page<Payment> =
            Page::fetch(self.client.clone(), &Self::path(""), filters.to_vec()).await?;
        debug!("Payments obtained: {}", page.items().len());
        Ok(page)
    }

    async fn create(&self, payment: &DraftPayment) -> Result<Payment, AppError> {
        info!(
            "Creating payment of {} {}",
            payment.amount.number, payment.amount.currency
        );
        let created: Payment = self
            .client
            .post(&Self::path(""), &QueryParams::new(), payment)
            .await?;
        debug!("Payment created: {} ({})", created.id, created.status);
        Ok(created)
    }

    async fn create_batch(
        &self,
        payments: &[DraftPayment],
        include_items: bool,
    ) -> Result<BatchOperation, AppError> {
        info!("Creating batch of {} payments", payments.len());
        let query = QueryParams::new().with("includeItems", include_items);
        let batch: BatchOperation = self
            .client
            .post(&Self::path("/batch"), &query, payments)
            .await?;
        debug!("Payment batch {} is {}", batch.batch_id, batch.status);
        Ok(batch)
    }

    async fn get_batch(
        &self,
        batch_id: i64,
        include_items: bool,
    ) -> Result<BatchOperation, AppError> {
        debug!("Getting payment batch {}", batch_id);
        let query = QueryParams::new().with("includeItems", include_items);
        self.client
            .get(&Self::path(&format!("/batch/{batch_id}")), &query)
            .await
    }

    async fn approve(&self, id: i64) -> Result<Payment, AppError> {
        self.action(id, "approve").await
    }

    async fn cancel(&self, id: i64) -> Result<Payment, AppError> {
        self.action(id, "cancel").await
    }
}
