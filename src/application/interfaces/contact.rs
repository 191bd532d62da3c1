use crate::error::AppError;
use crate::model::filters::Filter;
use crate::model::pagination::Page;
use crate::model::requests::ContactFull;
use crate::model::responses::BatchOperation;
use crate::presentation::contact::Contact;
use async_trait::async_trait;

/// Interface for the contact service
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Gets a contact by id
    async fn get(&self, id: i64) -> Result<Contact, AppError>;

    /// Lists contacts matching all of `filters`
    ///
    /// # Arguments
    /// * `filters` - Selection, paging and sort filters; may be empty
    ///
    /// # Returns
    /// * The first requested page, able to fetch the following ones
    async fn list(&self, filters: &[Filter]) -> Result<Page<Contact>, AppError>;

    /// Creates a contact
    async fn create(&self, contact: &ContactFull) -> Result<Contact, AppError>;

    /// Submits several contacts for creation in one batch
    ///
    /// # Arguments
    /// * `contacts` - Contacts to create
    /// * `include_items` - Whether the response lists every batch item
    async fn create_batch(
        &self,
        contacts: &[ContactFull],
        include_items: bool,
    ) -> Result<BatchOperation, AppError>;

    /// Gets the status of a contact batch
    async fn get_batch(&self, batch_id: i64, include_items: bool)
    -> Result<BatchOperation, AppError>;
}
