use crate::error::AppError;
use crate::presentation::invoice::Invoice;
use async_trait::async_trait;

/// Interface for the invoice service
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// Creates an invoice
    async fn create(&self, invoice: &Invoice) -> Result<Invoice, AppError>;

    /// Gets an invoice by id
    async fn get(&self, id: i64) -> Result<Invoice, AppError>;

    /// Cancels an invoice
    async fn cancel(&self, id: i64) -> Result<Invoice, AppError>;
}
