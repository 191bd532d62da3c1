/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::interfaces::contact::ContactService;
use crate::constants::API_PREFIX;
use crate::error::AppError;
use crate::model::filters::{Filter, QueryParams};
use crate::model::http::HttpClient;
use crate::model::pagination::Page;
use crate::model::requests::ContactFull;
use crate::model::responses::BatchOperation;
use crate::presentation::contact::Contact;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the contact service
pub struct ContactServiceImpl {
    client: Arc<HttpClient>,
}

impl ContactServiceImpl {
    /// Creates a new instance of the contact service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn path(suffix: &str) -> String {
        format!("{API_PREFIX}/contacts{suffix}")
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn get(&self, id: i64) -> Result<Contact, AppError> {
        debug!("Getting contact {}", id);
        self.client
            .get(&Self::path(&format!("/{id}")), &QueryParams::new())
            .await
    }

    async fn list(&self, filters: &[Filter]) -> Result<Page<Contact>, AppError> {
        info!("Listing contacts with {} filters", filters.len());
        let page: Page<Contact> =
            Page::fetch(self.client.clone(), &Self::path(""), filters.to_vec()).await?;
        debug!("Contacts obtained: {}", page.items().len());
        Ok(page)
    }

    async fn create(&self, contact: &ContactFull) -> Result<Contact, AppError> {
        info!("Creating contact for {}", contact.contact.email);
        let created: Contact = self
            .client
            .post(&Self::path(""), &QueryParams::new(), contact)
            .await?;
        debug!("Contact created with id {:?}", created.id);
        Ok(created)
    }

    async fn create_batch(
        &self,
        contacts: &[ContactFull],
        include_items: bool,
    ) -> Result<BatchOperation, AppError> {
        info!("Creating batch of {} contacts", contacts.len());
        let query = QueryParams::new().with("includeItems", include_items);
        let batch: BatchOperation = self
            .client
            .post(&Self::path("/batch"), &query, contacts)
            .await?;
        debug!("Contact batch {} is {}", batch.batch_id, batch.status);
        Ok(batch)
    }

    async fn get_batch(
        &self,
        batch_id: i64,
        include_items: bool,
    ) -> Result<BatchOperation, AppError> {
        debug!("Getting contact batch {}", batch_id);
        let query = QueryParams::new().with("includeItems", include_items);
        self.client
            .get(&Self::path(&format!("/batch/{batch_id}")), &query)
            .await
    }
}
