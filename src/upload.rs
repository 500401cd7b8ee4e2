use crate::constants::{IMGUR_UPLOAD_URL, UPLOAD_FIELD_NAME, UPLOAD_FILE_NAME, UPLOAD_MIME_TYPE};
use crate::error::{Result, UploadToolError};
use crate::processing::PreparedImage;
use reqwest::multipart;
use serde::Deserialize;

/// The seam between the batch driver and the remote image host. Implemented
/// by [`ImgurClient`] in production and by mocks in tests.
pub trait ImageHost {
    /// Uploads one prepared image and returns its hosted URL.
    fn upload(&self, image: &PreparedImage) -> Result<String>;
}

/// Client for Imgur's anonymous image upload endpoint.
#[derive(Debug, Clone)]
pub struct ImgurClient {
    client_id: String,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ImgurResponse {
    data: ImgurData,
}

#[derive(Debug, Deserialize)]
struct ImgurData {
    link: Option<String>,
}

impl ImgurClient {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            endpoint: IMGUR_UPLOAD_URL.to_string(),
        }
    }

    /// Overrides the upload endpoint. Used by tests to point the client at
    /// a local server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues the multipart POST to Imgur and extracts the hosted URL.
    ///
    /// One outbound request per call, no retry. Non-200 responses carry the
    /// raw body text back in the error.
    pub async fn upload_async(&self, image: &PreparedImage) -> Result<String> {
        let part = multipart::Part::bytes(image.as_bytes().to_vec())
            .file_name(UPLOAD_FILE_NAME)
            .mime_str(UPLOAD_MIME_TYPE)?;
        let form = multipart::Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = reqwest::Client::new()
            .post(&self.endpoint)
            .header("Authorization", format!("Client-ID {}", self.client_id))
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        parse_upload_response(status, &body)
    }
}

impl ImageHost for ImgurClient {
    fn upload(&self, image: &PreparedImage) -> Result<String> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.upload_async(image))
    }
}

/// Classifies an Imgur upload response: the hosted URL on a 200 with a
/// `data.link` field, an error otherwise.
pub fn parse_upload_response(status: u16, body: &str) -> Result<String> {
    if status != 200 {
        return Err(UploadToolError::HttpStatus {
            status,
            body: body.to_string(),
        });
    }

    let parsed: ImgurResponse =
        serde_json::from_str(body).map_err(|_| UploadToolError::MissingLink)?;
    parsed.data.link.ok_or(UploadToolError::MissingLink)
}
