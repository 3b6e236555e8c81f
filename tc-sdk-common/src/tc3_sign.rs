use crate::Error;
use crate::helper::{hmac_sha256, now_timestamp, sha256_hex, utc_date};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

// 腾讯云签名文档：https://cloud.tencent.com/document/api/551/30636

pub const ALGORITHM: &str = "TC3-HMAC-SHA256";
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const SIGNED_HEADERS: &str = "content-type;host;x-tc-action";
const TERMINATION: &str = "tc3_request";

/// 一次签名所需的时间信息，每次请求（包括重试）都要重新生成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningMaterial {
    pub timestamp: i64,
    /// UTC日期 YYYY-MM-DD，和服务端不一致会导致签名失败
    pub date: String,
}

impl SigningMaterial {
    pub fn new(timestamp: i64) -> Result<Self, Error> {
        Ok(Self {
            timestamp,
            date: utc_date(timestamp)?,
        })
    }

    pub fn now() -> Result<Self, Error> {
        Self::new(now_timestamp())
    }
}

/// 把请求参数序列化为key升序排列的紧凑json
///
/// 签名时hash的就是这里返回的字节，发送请求时也必须使用同样的字节
pub fn canonical_body(params: &impl Serialize) -> Result<Vec<u8>, Error> {
    let v = serde_json::to_value(params)?;
    if !v.is_object() {
        return Err(Error::Common(
            "canonical_body: request params is not an object!".to_owned(),
        ));
    }
    Ok(serde_json::to_vec(&sort_keys(v))?)
}

// serde_json开启preserve_order后Map按插入顺序输出，所以这里显式按key排序后再插入
fn sort_keys(v: Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let mut sorted = Map::with_capacity(entries.len());
            for (k, val) in entries {
                sorted.insert(k, sort_keys(val));
            }
            Value::Object(sorted)
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// CanonicalRequest
///
/// HTTPRequestMethod固定为POST，CanonicalURI固定为`/`，CanonicalQueryString为空
pub fn canonical_request(host: &str, action: &str, body: &[u8]) -> String {
    let can_headers = format!(
        "content-type:{}\nhost:{}\nx-tc-action:{}\n",
        CONTENT_TYPE,
        host,
        action.to_lowercase()
    );
    format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        "POST",
        "/",
        "",
        can_headers,
        SIGNED_HEADERS,
        sha256_hex(body)
    )
}

/// Date/Service/tc3_request
pub fn credential_scope(date: &str, service: &str) -> String {
    format!("{date}/{service}/{TERMINATION}")
}

pub fn string_to_sign(material: &SigningMaterial, service: &str, canonical_request: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        material.timestamp,
        credential_scope(&material.date, service),
        sha256_hex(canonical_request.as_bytes())
    )
}

/// SecretDate -> SecretService -> SecretSigning，中间结果保持原始字节
pub fn derive_signing_key(secret_key: &str, date: &str, service: &str) -> Vec<u8> {
    let secret_date = hmac_sha256(format!("TC3{secret_key}").as_bytes(), date.as_bytes());
    let secret_service = hmac_sha256(&secret_date, service.as_bytes());
    hmac_sha256(&secret_service, TERMINATION.as_bytes())
}

/// 返回小写hex的Signature
pub fn sign(
    secret_key: &str,
    material: &SigningMaterial,
    service: &str,
    canonical_request: &str,
) -> String {
    let signing_key = derive_signing_key(secret_key, &material.date, service);
    let str_to_sign = string_to_sign(material, service, canonical_request);
    hex::encode(hmac_sha256(&signing_key, str_to_sign.as_bytes()))
}

pub fn authorization(
    secret_id: &str,
    material: &SigningMaterial,
    service: &str,
    signature: &str,
) -> String {
    format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM,
        secret_id,
        credential_scope(&material.date, service),
        SIGNED_HEADERS,
        signature
    )
}

pub struct SignParams<'a> {
    pub secret_id: &'a str,
    pub secret_key: &'a str,
    pub host: &'a str,
    pub service: &'a str,
    pub action: &'a str,
    pub version: &'a str,
    pub region: &'a str,
    pub material: &'a SigningMaterial,
    // 必须是canonical_body生成的字节
    pub body: &'a [u8],
}

// 签名入口
//
// 返回请求需要携带的7个公共请求头
pub fn get_tc3_request_header(params: SignParams<'_>) -> HashMap<&'static str, String> {
    let can_req_str = canonical_request(params.host, params.action, params.body);
    let signature = sign(
        params.secret_key,
        params.material,
        params.service,
        &can_req_str,
    );
    let authorization = authorization(params.secret_id, params.material, params.service, &signature);

    let mut headers = HashMap::with_capacity(7);
    headers.insert("Authorization", authorization);
    headers.insert("Content-Type", CONTENT_TYPE.to_owned());
    headers.insert("Host", params.host.to_owned());
    headers.insert("X-TC-Action", params.action.to_owned());
    headers.insert("X-TC-Timestamp", params.material.timestamp.to_string());
    headers.insert("X-TC-Version", params.version.to_owned());
    headers.insert("X-TC-Region", params.region.to_owned());
    headers
}
