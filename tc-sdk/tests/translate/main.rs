#![cfg(feature = "translate")]

use mockito::{Matcher, Server};
use std::sync::Arc;
use std::time::Duration;
use tc_sdk::credentials::{Credentials, StaticCredentialsProvider};
use tc_sdk::translate::*;

const SUCCESS_BODY: &str =
    r#"{"Response":{"TargetText":"你好","Source":"en","Target":"zh","RequestId":"r1"}}"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn creds() -> Credentials {
    Credentials::new("AKIDtest123456", "secret123456", "ap-chengdu")
}

fn get_mock_client(server: &Server, creds: Credentials) -> Client {
    Client::builder()
        .credentials_provider(Arc::new(StaticCredentialsProvider::new(creds)))
        .endpoint(server.url())
        .base_delay(Duration::from_millis(10))
        .build()
}

#[tokio::test]
async fn empty_credentials_test() {
    init_tracing();
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", "/").expect(0).create_async().await;

    let client = get_mock_client(&server, Credentials::new("", "", "ap-chengdu"));
    assert_eq!(client.translate("hello", "en", "zh").await, None);

    mock.assert_async().await;
}

#[tokio::test]
async fn success_test() {
    init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json; charset=utf-8")
        .match_header("host", "tmt.tencentcloudapi.com")
        .match_header("x-tc-action", "TextTranslate")
        .match_header("x-tc-version", "2018-03-21")
        .match_header("x-tc-region", "ap-chengdu")
        .match_header("x-tc-timestamp", Matcher::Regex(r"^\d+$".to_owned()))
        .match_header(
            "authorization",
            Matcher::Regex(
                r"^TC3-HMAC-SHA256 Credential=AKIDtest123456/\d{4}-\d{2}-\d{2}/tmt/tc3_request, SignedHeaders=content-type;host;x-tc-action, Signature=[0-9a-f]{64}$"
                    .to_owned(),
            ),
        )
        .match_body(Matcher::Exact(
            r#"{"ProjectId":0,"Source":"en","SourceText":"hello","Target":"zh"}"#.to_owned(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SUCCESS_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = get_mock_client(&server, creds());
    assert_eq!(
        client.translate("hello", "en", "zh").await.as_deref(),
        Some("你好")
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn api_error_test() {
    init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            r#"{"Response":{"Error":{"Code":"AuthFailure.SignatureFailure","Message":"bad sig"}}}"#,
        )
        // translate和try_translate各请求一次
        .expect(2)
        .create_async()
        .await;

    let client = get_mock_client(&server, creds());
    assert_eq!(client.translate("hello", "en", "zh").await, None);
    match client.try_translate("hello", "en", "zh").await {
        Err(Error::Api { code, message }) => {
            assert_eq!(code, "AuthFailure.SignatureFailure");
            assert_eq!(message, "bad sig");
        }
        other => panic!("unexpected: {other:?}"),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_retry_test() {
    init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(503)
        .expect(3)
        .create_async()
        .await;

    let client = get_mock_client(&server, creds());
    assert_eq!(client.translate("hello", "en", "zh").await, None);

    mock.assert_async().await;
}

#[tokio::test]
async fn bad_request_not_retried_test() {
    init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(400)
        .expect(1)
        .create_async()
        .await;

    let client = get_mock_client(&server, creds());
    assert!(matches!(
        client.try_translate("hello", "en", "zh").await,
        Err(Error::Http { status: 400 })
    ));

    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_response_test() {
    init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .expect(1)
        .create_async()
        .await;

    let client = get_mock_client(&server, creds());
    assert!(matches!(
        client.try_translate("hello", "en", "zh").await,
        Err(Error::InvalidResponse(_))
    ));

    mock.assert_async().await;
}

#[tokio::test]
async fn text_length_boundary_test() {
    init_tracing();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(SUCCESS_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = get_mock_client(&server, creds());
    let max = "a".repeat(MAX_TEXT_LEN);
    assert!(client.translate(&max, "en", "zh").await.is_some());
    let too_long = "a".repeat(MAX_TEXT_LEN + 1);
    assert_eq!(client.translate(&too_long, "en", "zh").await, None);

    mock.assert_async().await;
}

#[tokio::test]
async fn translate_and_format_test() {
    init_tracing();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(500)
        .create_async()
        .await;

    let client = get_mock_client(&server, creds());
    let res = client
        .translate_and_format("keep this text", DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG)
        .await;
    assert!(res.contains("keep this text"));
    assert_eq!(res, "Translation (Tencent): Failed to translate 'keep this text'");
}

#[tokio::test]
async fn transport_error_test() {
    init_tracing();
    // 没有服务监听的端口
    let client = Client::builder()
        .credentials_provider(Arc::new(StaticCredentialsProvider::new(creds())))
        .endpoint("http://127.0.0.1:1".to_owned())
        .base_delay(Duration::from_millis(10))
        .build();
    assert!(matches!(
        client.try_translate("hello", "en", "zh").await,
        Err(Error::Transport(_))
    ));
}

// region    --- live
fn get_trans_client() -> Client {
    let file_str = std::fs::read_to_string("tests/translate/config.toml").unwrap();
    let creds = toml::from_str::<Credentials>(&file_str).unwrap();
    creds.validate().unwrap();
    Client::builder()
        .credentials_provider(Arc::new(StaticCredentialsProvider::new(creds)))
        .build()
}

#[tokio::test]
#[ignore]
async fn translate_live_test() {
    init_tracing();
    let client = get_trans_client();
    let res = client
        .try_translate("test first line.\ntest second line.", "auto", "zh")
        .await;

    match res {
        Ok(s) => println!("[success] res:\n{}", s),
        Err(e) => println!("[error] {:#?}", e),
    }
}
// endregion --- live
