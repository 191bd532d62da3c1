use crate::application::interfaces::meta::MetaService;
use crate::constants::PUBLIC_API_PREFIX;
use crate::error::AppError;
use crate::model::filters::QueryParams;
use crate::model::http::HttpClient;
use crate::presentation::meta::CountryCurrencyMap;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the metadata service
pub struct MetaServiceImpl {
    client: Arc<HttpClient>,
}

impl MetaServiceImpl {
    /// Creates a new instance of the metadata service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetaService for MetaServiceImpl {
    async fn country_currency_map(
        &self,
        bank_fields: bool,
    ) -> Result<Vec<CountryCurrencyMap>, AppError> {
        info!("Getting country currency map");
        let query = QueryParams::new().with("bankFields", bank_fields);
        let countries: Vec<CountryCurrencyMap> = self
            .client
            .get(&format!("{PUBLIC_API_PREFIX}/country-currency-map"), &query)
            .await?;
        debug!("Country currency map obtained: {} countries", countries.len());
        Ok(countries)
    }
}
