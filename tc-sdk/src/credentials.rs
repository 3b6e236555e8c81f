//! Credentials and CredentialsProvider definitions.
//!
//! 构建client的时候需要传入实现了CredentialsProvider trait的类型，每次调用只会load一次，
//! 整个签名过程使用同一份Credentials，不会在调用中途读到被修改了一半的配置。
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use tc_sdk::credentials::{Credentials, StaticCredentialsProvider};
//! use tc_sdk::translate;
//!
//! fn get_trans_client() -> translate::Client {
//!     let file_str = std::fs::read_to_string("tests/translate/config.toml").unwrap();
//!     let creds = toml::from_str::<Credentials>(&file_str).unwrap();
//!     translate::Client::builder()
//!         .credentials_provider(Arc::new(StaticCredentialsProvider::new(creds)))
//!         .build()
//! }
//! ```

use serde::Deserialize;

pub const DEFAULT_REGION: &str = "ap-chengdu";
const MIN_SECRET_LEN: usize = 10;

#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub secret_id: String,
    pub secret_key: String,
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    DEFAULT_REGION.to_owned()
}

impl Credentials {
    pub fn new(
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            region: region.into(),
        }
    }

    /// secret_id和secret_key都不为空
    pub fn is_configured(&self) -> bool {
        !self.secret_id.is_empty() && !self.secret_key.is_empty()
    }

    /// 设置页面保存前使用的格式检查，翻译请求本身只要求不为空
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.secret_id.is_empty() {
            return Err(CredentialsError::Invalid("Secret ID is empty".to_owned()));
        }
        if self.secret_key.is_empty() {
            return Err(CredentialsError::Invalid("Secret Key is empty".to_owned()));
        }
        if self.secret_id.chars().count() < MIN_SECRET_LEN {
            return Err(CredentialsError::Invalid("Secret ID is too short".to_owned()));
        }
        if self.secret_key.chars().count() < MIN_SECRET_LEN {
            return Err(CredentialsError::Invalid("Secret Key is too short".to_owned()));
        }
        Ok(())
    }
}

// secret_key不能出现在日志里
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"******")
            .field("region", &self.region)
            .finish()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CredentialsError {
    #[error("failed to load credentials: {0}")]
    Provider(String),
    #[error("invalid credentials: {0}")]
    Invalid(String),
}

#[async_trait::async_trait]
pub trait CredentialsProvider: Send + Sync {
    async fn load(&self) -> Result<Credentials, CredentialsError>;
}

/// 固定的Credentials
pub struct StaticCredentialsProvider {
    creds: Credentials,
}

impl StaticCredentialsProvider {
    pub fn new(creds: Credentials) -> Self {
        Self { creds }
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for StaticCredentialsProvider {
    async fn load(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.creds.clone())
    }
}
