mod common;

use common::{ErrorCounter, ScriptedGenerator};
use folio_core::content::DEFAULT_IDEA_STACK;
use folio_core::gateway::prompts::{CHAT_FALLBACK, IDEA_FALLBACK_DESCRIPTION, IDEA_FALLBACK_TITLE};
use folio_core::{FolioError, GenAiClient, GenAiConfig, PortfolioGateway, ProjectIdea};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const APOLOGY: &str =
    "I'm having a little trouble connecting to my creative circuits. Please try again in a moment!";

fn gateway_with(script: ScriptedGenerator) -> (PortfolioGateway, Arc<ScriptedGenerator>) {
    let script = Arc::new(script);
    (PortfolioGateway::new(script.clone()), script)
}

#[tokio::test]
async fn chat_reply_returns_remote_text_verbatim() {
    let (gw, script) = gateway_with(ScriptedGenerator::new().reply("I love clean JavaScript."));

    let out = gw.chat_reply("What's your favorite language?", None).await;

    assert!(out.is_live());
    assert_eq!(out.into_inner(), "I love clean JavaScript.");
    assert_eq!(script.calls(), 1);
}

#[tokio::test]
async fn chat_reply_does_not_trim_or_truncate() {
    let long = format!("  {}\n", "word ".repeat(2_000));
    let (gw, _) = gateway_with(ScriptedGenerator::new().reply(&long));

    assert_eq!(gw.chat_reply("ramble", None).await.into_inner(), long);
}

#[tokio::test]
async fn chat_failure_returns_apology_and_logs_once() {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let (gw, script) = gateway_with(
        ScriptedGenerator::new().fail(FolioError::Transport("connection reset".into())),
    );

    let out = gw.chat_reply("hello?", Some("ctx")).await;

    assert_eq!(out.value(), APOLOGY);
    assert_eq!(CHAT_FALLBACK, APOLOGY);
    assert!(matches!(out.cause(), Some(FolioError::Transport(_))));
    assert_eq!(counter.count(), 1);
    assert_eq!(script.calls(), 1, "no retry expected");
}

#[tokio::test]
async fn idea_success_returns_exact_record() {
    let (gw, script) = gateway_with(ScriptedGenerator::new().reply(
        r#"{"title": "Color Palette Lab", "description": "Pick colors with CSS custom properties. Share palettes as URLs."}"#,
    ));

    let idea = gw.generate_idea(&DEFAULT_IDEA_STACK).await;

    assert!(idea.is_live());
    assert_eq!(
        idea.into_inner(),
        ProjectIdea {
            title: "Color Palette Lab".into(),
            description: "Pick colors with CSS custom properties. Share palettes as URLs.".into(),
        }
    );
    let req = script.last_request().expect("request recorded");
    assert!(req
        .prompt_text()
        .contains("highlights HTML5, Modern CSS, Vanilla JavaScript."));
}

#[tokio::test]
async fn idea_malformed_text_returns_fallback_record() {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let (gw, _) = gateway_with(ScriptedGenerator::new().reply("not json at all"));

    let idea = gw
        .generate_idea(&["HTML5", "Modern CSS", "Vanilla JavaScript"])
        .await;

    assert!(idea.is_fallback());
    assert_eq!(
        idea.into_inner(),
        ProjectIdea {
            title: "Interactive Dashboard".into(),
            description:
                "A clean dashboard concept focusing on CSS Grid and vanilla JS data manipulation."
                    .into(),
        }
    );
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn idea_missing_key_is_undecodable() {
    let (gw, _) = gateway_with(ScriptedGenerator::new().reply(r#"{"title": "Only a title"}"#));

    let idea = gw.generate_idea(&["CSS"]).await;

    assert!(matches!(idea.cause(), Some(FolioError::Decode(_))));
    assert_eq!(idea.value().title, IDEA_FALLBACK_TITLE);
    assert_eq!(idea.value().description, IDEA_FALLBACK_DESCRIPTION);
}

#[tokio::test]
async fn idea_api_failure_returns_fallback_record() {
    let (gw, _) = gateway_with(ScriptedGenerator::new().fail(FolioError::Api {
        status: 429,
        body: "quota".into(),
    }));

    let idea = gw.generate_idea(&["HTML5"]).await;
    assert_eq!(idea.value().title, IDEA_FALLBACK_TITLE);
}

#[tokio::test]
async fn repeated_calls_each_reach_the_service() {
    let (gw, script) = gateway_with(ScriptedGenerator::new().reply("one").reply("two"));

    let a = gw.chat_reply("same", None).await.into_inner();
    let b = gw.chat_reply("same", None).await.into_inner();

    assert_eq!((a.as_str(), b.as_str()), ("one", "two"));
    assert_eq!(script.calls(), 2);
}

// End-to-end through the real HTTP client

fn http_gateway(base_url: String, timeout_ms: u64) -> PortfolioGateway {
    let client = GenAiClient::new(GenAiConfig {
        base_url,
        model: "gemini-test".into(),
        api_key: Some("test-key".into()),
        request_timeout_ms: timeout_ms,
    })
    .expect("client builds");
    PortfolioGateway::from_client(client)
}

#[tokio::test]
async fn http_success_flows_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "I love clean JavaScript."}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let out = http_gateway(server.uri(), 5_000)
        .chat_reply("What's your favorite language?", None)
        .await;
    assert_eq!(out.into_inner(), "I love clean JavaScript.");
}

#[tokio::test]
async fn http_server_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let out = http_gateway(server.uri(), 5_000).chat_reply("hi", None).await;
    assert!(matches!(out.cause(), Some(FolioError::Api { status: 503, .. })));
    assert_eq!(out.into_inner(), APOLOGY);
}

#[tokio::test]
async fn http_timeout_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(3))
                .set_body_json(json!({"candidates": []})),
        )
        .mount(&server)
        .await;

    let out = http_gateway(server.uri(), 200).chat_reply("hi", None).await;
    assert!(matches!(out.cause(), Some(FolioError::Transport(_))));
    assert_eq!(out.into_inner(), APOLOGY);
}

#[tokio::test]
async fn http_non_json_idea_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "Here is a fun idea: a clock!"}]}}]
        })))
        .mount(&server)
        .await;

    let idea = http_gateway(server.uri(), 5_000)
        .generate_idea(&DEFAULT_IDEA_STACK)
        .await;
    assert_eq!(idea.into_inner().title, "Interactive Dashboard");
}
