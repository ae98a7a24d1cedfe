/// Reasons a successfully fetched body could not be shown as JSON.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Response body is not JSON: {0}")]
    Json(#[from] serde_json::Error),
}
