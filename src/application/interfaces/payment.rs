use crate::error::AppError;
use crate::model::filters::Filter;
use crate::model::pagination::Page;
use crate::model::requests::DraftPayment;
use crate::model::responses::BatchOperation;
use crate::presentation::payment::Payment;
use async_trait::async_trait;

/// Interface for the payment service
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Gets a payment by id
    async fn get(&self, id: i64) -> Result<Payment, AppError>;

    /// Lists payments matching all of `filters`
    async fn list(&self, filters: &[Filter]) -> Result<Page<Payment>, AppError>;

    /// Creates a payment from a draft
    ///
    /// # Returns
    /// * The created payment, with its server-assigned id and status
    async fn create(&self, payment: &DraftPayment) -> Result<Payment, AppError>;

    /// Submits several payments for creation in one batch
    async fn create_batch(
        &self,
        payments: &[DraftPayment],
        include_items: bool,
    ) -> Result<BatchOperation, AppError>;

    /// Gets the status of a payment batch
    async fn get_batch(&self, batch_id: i64, include_items: bool)
    -> Result<BatchOperation, AppError>;

    /// Approves a payment
    async fn approve(&self, id: i64) -> Result<Payment, AppError>;

    /// Cancels a payment
    async fn cancel(&self, id: i64) -> Result<Payment, AppError>;
}
