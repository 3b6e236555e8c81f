use crate::credentials::CredentialsError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("tencent cloud credentials not configured")]
    Configuration,
    #[error("text exceeds maximum length: {len} > {max} characters")]
    Validation { len: usize, max: usize },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("http error: {status}")]
    Http { status: u16 },
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),
    #[error("api error [{code}]: {message}")]
    Api { code: String, message: String },
    #[error("translation request failed after retries")]
    RequestFailed,
    #[error("credentials error: {0}")]
    Credentials(#[from] CredentialsError),
    #[error("sign error: {0}")]
    Sign(#[from] tc_sdk_common::Error),
}

impl Error {
    /// 只有服务端过载(5xx)和限流(429)可以重试
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Http { status } if *status >= 500 || *status == 429)
    }
}
