use crate::error::AppError;
use crate::presentation::attachment::Attachment;
use async_trait::async_trait;
use reqwest::Response;
use std::path::Path;

/// Interface for the attachment service
#[async_trait]
pub trait AttachmentService: Send + Sync {
    /// Uploads a local file
    ///
    /// # Arguments
    /// * `path` - File to upload; its base name becomes the attachment name
    ///
    /// # Returns
    /// * The attachment reference to put on a payment or invoice
    async fn upload(&self, path: &Path) -> Result<Attachment, AppError>;

    /// Starts downloading an attachment
    ///
    /// # Arguments
    /// * `name` - Attachment name
    /// * `reference_id` - Payment or invoice the attachment belongs to
    ///
    /// # Returns
    /// * The response whose body is the raw attachment content
    async fn download(&self, name: &str, reference_id: &str) -> Result<Response, AppError>;

    /// Downloads an attachment into a local file
    ///
    /// # Returns
    /// * The number of bytes written
    async fn download_to(
        &self,
        name: &str,
        reference_id: &str,
        destination: &Path,
    ) -> Result<u64, AppError>;
}
