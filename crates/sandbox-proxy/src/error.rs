/// Failures of a single sandbox request, one variant per step.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Malformed submission: {0}")]
    FormParse(String),

    #[error("Unreadable file in field '{field}': {message}")]
    FileRead { field: String, message: String },

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Backend request failed: {0}")]
    Upstream(String),

    #[error("Backend response is not valid JSON: {0}")]
    ResponseParse(String),
}
