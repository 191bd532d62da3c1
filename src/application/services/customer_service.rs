use crate::application::interfaces::customer::CustomerService;
use crate::constants::API_PREFIX;
use crate::error::AppError;
use crate::model::filters::Filter;
use crate::model::http::HttpClient;
use crate::model::pagination::Page;
use crate::presentation::customer::Customer;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Implementation of the customer service
pub struct CustomerServiceImpl {
    client: Arc<HttpClient>,
}

impl CustomerServiceImpl {
    /// Creates a new instance of the customer service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CustomerService for CustomerServiceImpl {
    async fn search(&self, filters: &[Filter]) -> Result<Page<Customer>, AppError> {
        info!("Searching customers with {} filters", filters.len());
        let path = format!("{API_PREFIX}/customers");
        Page::fetch(self.client.clone(), &path, filters.to_vec()).await
    }
}
