//! 腾讯云机器翻译 TextTranslate
//!
//! > <a href="https://cloud.tencent.com/document/api/551/15619" target="_blank">api文档地址</a>

use bon::bon;
use std::sync::Arc;
use std::time::Duration;

mod error;
pub use error::Error;

mod dispatch;
pub use dispatch::{BoxError, RawResponse, ReqwestTransport, Transport};

mod retry;
pub use retry::{DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS, RetryPolicy};

mod trans;
mod types_rs;
pub use types_rs::TextTranslate;

use crate::credentials::CredentialsProvider;

pub const DEFAULT_HOST: &str = "tmt.tencentcloudapi.com";
pub const SERVICE: &str = "tmt";
pub const ACTION: &str = "TextTranslate";
pub const VERSION: &str = "2018-03-21";
pub const PROJECT_ID: i64 = 0;
/// 单次请求文本的最大字符数
pub const MAX_TEXT_LEN: usize = 2000;

pub const DEFAULT_SOURCE_LANG: &str = "en";
pub const DEFAULT_TARGET_LANG: &str = "zh";

pub struct Client {
    credentials_provider: Arc<dyn CredentialsProvider>,
    transport: Arc<dyn Transport>,
    host: String,
    endpoint: String,
    retry_policy: RetryPolicy,
}

#[bon]
impl Client {
    #[builder(on(String, into))]
    pub fn new(
        credentials_provider: Arc<dyn CredentialsProvider>,
        /// 参与签名的Host
        #[builder(default = DEFAULT_HOST.to_owned())]
        host: String,
        /// 实际发送请求的地址，默认为`https://{host}`
        endpoint: Option<String>,
        transport: Option<Arc<dyn Transport>>,
        #[builder(default = DEFAULT_MAX_ATTEMPTS)] max_attempts: u32,
        #[builder(default = DEFAULT_BASE_DELAY)] base_delay: Duration,
    ) -> Self {
        let endpoint = endpoint.unwrap_or_else(|| format!("https://{host}"));
        let transport =
            transport.unwrap_or_else(|| Arc::new(ReqwestTransport::default()) as Arc<dyn Transport>);
        Self {
            credentials_provider,
            transport,
            host,
            endpoint,
            retry_policy: RetryPolicy::new(max_attempts, base_delay),
        }
    }
}
