use super::Error;
use super::types_rs::{ResponseBody, ResponseEnvelope};
use reqwest::header::HeaderMap;
use tracing::debug;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 一次http请求的原始结果
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// 发送POST请求，默认实现是[`ReqwestTransport`]
///
/// 实现里不要做重试，重试由`RetryPolicy`决定
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, headers: HeaderMap, body: Vec<u8>)
    -> Result<RawResponse, BoxError>;
}

#[derive(Default)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Result<RawResponse, BoxError> {
        let resp = self
            .http_client
            .post(url)
            .headers(headers)
            .body(body)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}

/// 把错误和它的source链拼成一行，reqwest的Display不包含底层原因
pub(crate) fn error_chain(e: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

/// 把一次请求的结果归类为译文或者具体的错误
pub(crate) fn classify(resp: RawResponse) -> Result<String, Error> {
    if !(200..300).contains(&resp.status) {
        return Err(Error::Http {
            status: resp.status,
        });
    }

    let envelope: ResponseEnvelope = serde_json::from_slice(&resp.body).map_err(|e| {
        Error::InvalidResponse(format!(
            "{}, response text: {}",
            e,
            String::from_utf8_lossy(&resp.body)
        ))
    })?;

    match envelope.response {
        ResponseBody::Success(data) => {
            debug!(request_id = %data.request_id, source = %data.source, target = %data.target, "translate success");
            Ok(data.target_text)
        }
        ResponseBody::Error(err) => {
            debug!(request_id = ?err.request_id, code = %err.error.code, "api returned error");
            Err(Error::Api {
                code: err.error.code,
                message: err.error.message,
            })
        }
    }
}
