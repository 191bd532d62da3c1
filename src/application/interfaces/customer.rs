use crate::error::AppError;
use crate::model::filters::Filter;
use crate::model::pagination::Page;
use crate::presentation::customer::Customer;
use async_trait::async_trait;

/// Interface for the customer service
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Searches the Veem customers matching all of `filters`
    async fn search(&self, filters: &[Filter]) -> Result<Page<Customer>, AppError>;
}
