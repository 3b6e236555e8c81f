use serde::{Deserialize, Serialize};

// region    --- request
/// TextTranslate的请求体，序列化后的字段名为`SourceText`、`Source`、`Target`、`ProjectId`
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct TextTranslate<'a> {
    pub source_text: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub project_id: i64,
}

impl<'a> TextTranslate<'a> {
    pub fn new(source_text: &'a str, source: &'a str, target: &'a str) -> Self {
        Self {
            source_text,
            source,
            target,
            project_id: super::PROJECT_ID,
        }
    }
}
// endregion --- request

// region    --- response
#[derive(Deserialize, Debug)]
pub(crate) struct ResponseEnvelope {
    #[serde(rename = "Response")]
    pub response: ResponseBody,
}

/// 先看`Response`里有没有`Error`，再按成功的结构解析，只解析一次
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum ResponseBody {
    Error(ErrorResponse),
    Success(TextTranslateResponse),
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TextTranslateResponse {
    pub target_text: String,
    pub source: String,
    pub target: String,
    pub request_id: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ErrorResponse {
    pub error: ApiErrorDetail,
    pub request_id: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}
// endregion --- response
