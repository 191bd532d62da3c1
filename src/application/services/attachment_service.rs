/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::interfaces::attachment::AttachmentService;
use crate::constants::{API_PREFIX, BINARY_CONTENT_TYPE, REQUEST_ID_HEADER};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::presentation::attachment::Attachment;
use crate::utils::id::request_id;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Response};
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Implementation of the attachment service
pub struct AttachmentServiceImpl {
    client: Arc<HttpClient>,
}

impl AttachmentServiceImpl {
    /// Creates a new instance of the attachment service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn path() -> String {
        format!("{API_PREFIX}/attachments")
    }
}

#[async_trait]
impl AttachmentService for AttachmentServiceImpl {
    async fn upload(&self, path: &Path) -> Result<Attachment, AppError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::InvalidInput(format!("no file name in {}", path.display())))?
            .to_string();

        let content = tokio::fs::read(path).await?;
        info!("Uploading attachment {} ({} bytes)", file_name, content.len());

        let part = Part::bytes(content)
            .file_name(file_name)
            .mime_str(BINARY_CONTENT_TYPE)?;
        let form = Form::new().part("file", part);

        let request = self
            .client
            .build(Method::POST, &Self::path())
            .header(REQUEST_ID_HEADER, request_id())
            .multipart(form);

        let attachment: Attachment = self.client.send_and_decode(request).await?;
        debug!("Attachment stored under reference {}", attachment.reference_id);
        Ok(attachment)
    }

    async fn download(&self, name: &str, reference_id: &str) -> Result<Response, AppError> {
        info!("Downloading attachment {} of {}", name, reference_id);
        let request = self
            .client
            .build(Method::GET, &Self::path())
            .query(&[("name", name), ("referenceId", reference_id)]);
        self.client.send_raw(request, BINARY_CONTENT_TYPE).await
    }

    async fn download_to(
        &self,
        name: &str,
        reference_id: &str,
        destination: &Path,
    ) -> Result<u64, AppError> {
        let mut response = self.download(name, reference_id).await?;
        let mut file = tokio::fs::File::create(destination).await?;

        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!("Wrote {} bytes to {}", written, destination.display());
        Ok(written)
    }
}
