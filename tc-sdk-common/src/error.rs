#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error: {0}")]
    Common(String),
    #[error("invalid header `{name}`: {message}")]
    Header { name: String, message: String },
    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),
}
