use super::dispatch::{classify, error_chain};
use super::types_rs::TextTranslate;
use super::{ACTION, Client, Error, MAX_TEXT_LEN, SERVICE, VERSION};
use crate::credentials::Credentials;
use tc_sdk_common::helper::into_header_map;
use tc_sdk_common::tc3_sign::{SignParams, SigningMaterial, canonical_body, get_tc3_request_header};
use tracing::{debug, error, warn};

impl Client {
    /// 翻译text，失败时返回None
    ///
    /// 失败的具体原因只会记录在日志里，需要区分原因时使用[`Client::try_translate`]
    pub async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Option<String> {
        match self.try_translate(text, source_lang, target_lang).await {
            Ok(s) => Some(s),
            Err(e @ (Error::Configuration | Error::Credentials(_) | Error::Validation { .. })) => {
                warn!(error = %e, "translation not attempted");
                None
            }
            Err(e) => {
                error!(error = %e, "translation failed");
                None
            }
        }
    }

    /// 和[`Client::translate`]一样，但是失败时返回一段包含原文的提示文字
    pub async fn translate_and_format(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> String {
        match self.translate(text, source_lang, target_lang).await {
            Some(translation) => translation,
            None => format!("Translation (Tencent): Failed to translate '{text}'"),
        }
    }

    /// 注意事项:
    /// 1. 凭证为空或者text超过2000字符时不会发出请求
    /// 2. 5xx和429会按1s, 2s...退避重试，其它错误直接返回
    pub async fn try_translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, Error> {
        // 整个调用只读取一次凭证
        let creds = self.credentials_provider.load().await?;
        if !creds.is_configured() {
            return Err(Error::Configuration);
        }

        let len = text.chars().count();
        if len > MAX_TEXT_LEN {
            return Err(Error::Validation {
                len,
                max: MAX_TEXT_LEN,
            });
        }

        let body = canonical_body(&TextTranslate::new(text, source_lang, target_lang))?;

        self.retry_policy
            .execute(|attempt| self.dispatch(&creds, &body, attempt))
            .await
    }

    // 每次调用都用新的时间戳重新签名
    async fn dispatch(&self, creds: &Credentials, body: &[u8], attempt: u32) -> Result<String, Error> {
        let material = SigningMaterial::now()?;
        debug!(attempt, timestamp = material.timestamp, "send TextTranslate request");

        let headers = get_tc3_request_header(SignParams {
            secret_id: &creds.secret_id,
            secret_key: &creds.secret_key,
            host: &self.host,
            service: SERVICE,
            action: ACTION,
            version: VERSION,
            region: &creds.region,
            material: &material,
            body,
        });
        let header_map = into_header_map(headers.iter().map(|(k, v)| (*k, v.as_str())))?;

        let resp = self
            .transport
            .post(&self.endpoint, header_map, body.to_vec())
            .await
            .map_err(|e| Error::Transport(error_chain(e.as_ref())))?;

        classify(resp)
    }
}
