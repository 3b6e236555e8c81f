use crate::Error;
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;
use time::macros::format_description;

type HmacSha256 = Hmac<Sha256>;

/// 当前的Unix时间戳（秒）
pub fn now_timestamp() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// 输出格式: YYYY-MM-DD，始终按UTC计算
///
/// eg: 1551113065 -> 2019-02-25
pub fn utc_date(timestamp: i64) -> Result<String, Error> {
    let date_time = OffsetDateTime::from_unix_timestamp(timestamp)
        .map_err(|e| Error::Common(format!("invalid timestamp {timestamp}: {e}")))?;
    date_time
        .format(&format_description!("[year]-[month]-[day]"))
        .map_err(|e| Error::Common(format!("format date failed: {e}")))
}

/// 小写hex形式的sha256
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// 返回原始的digest字节，派生链中的中间密钥不能hex编码
pub fn hmac_sha256(secret: &[u8], data: &[u8]) -> Vec<u8> {
    // hmac对key长度没有限制，new_from_slice不会失败
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

pub fn into_header_map<'a, I>(headers: I) -> Result<HeaderMap, Error>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut map = HeaderMap::new();
    for (k, v) in headers {
        let name = HeaderName::from_bytes(k.as_bytes()).map_err(|e| Error::Header {
            name: k.to_owned(),
            message: e.to_string(),
        })?;
        let value = HeaderValue::from_str(v).map_err(|e| Error::Header {
            name: k.to_owned(),
            message: e.to_string(),
        })?;
        map.insert(name, value);
    }
    Ok(map)
}
