use crate::prelude::Error;
use sandbox_proxy_core::config::ProxyConfig;
use sandbox_proxy_core::request::build_chat_request;
use sandbox_proxy_core::submission::Submission;

/// Forward one submission to the backend and return its reply untouched.
///
/// Attached files are collected but do not reach the backend; only the
/// `code` field becomes the user message.
pub async fn proxy_submission(
    config: &ProxyConfig,
    submission: &Submission,
) -> Result<serde_json::Value, Error> {
    let files = submission.attached_files();
    log::debug!(
        "Submission with {} attached file(s): {:?}",
        files.len(),
        files.iter().map(|f| f.name.as_str()).collect::<Vec<_>>()
    );

    let request = build_chat_request(config, submission.code());

    crate::backend::send_chat_request(config, &request).await
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Router};
    use sandbox_proxy_core::submission::FormField;
    use std::sync::{Arc, Mutex};

    /// What the mock backend saw on its last request.
    #[derive(Debug, Default, Clone)]
    pub struct Recorded {
        pub authorization: Option<String>,
        pub content_type: Option<String>,
        pub body: Option<serde_json::Value>,
    }

    #[derive(Clone)]
    struct MockState {
        status: StatusCode,
        reply: &'static str,
        recorded: Arc<Mutex<Recorded>>,
    }

    async fn completions(
        State(state): State<MockState>,
        headers: HeaderMap,
        body: String,
    ) -> (StatusCode, &'static str) {
        let header = |name: axum::http::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        let mut recorded = state.recorded.lock().unwrap();
        recorded.authorization = header(axum::http::header::AUTHORIZATION);
        recorded.content_type = header(axum::http::header::CONTENT_TYPE);
        recorded.body = serde_json::from_str(&body).ok();

        (state.status, state.reply)
    }

    /// Start a fake chat-completion backend and return its base URL.
    pub async fn spawn_backend(
        status: StatusCode,
        reply: &'static str,
    ) -> (String, Arc<Mutex<Recorded>>) {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let state = MockState {
            status,
            reply,
            recorded: recorded.clone(),
        };

        let router = Router::new()
            .route("/v1/chat/completions", post(completions))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Failed to get mock address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Mock backend failed");
        });

        (format!("http://{addr}"), recorded)
    }

    fn config(base_url: &str, api_key: Option<&str>) -> ProxyConfig {
        ProxyConfig::resolve(
            Some(base_url.to_string()),
            api_key.map(str::to_string),
            None,
        )
    }

    const OK_REPLY: &str = r#"{"choices":[{"message":{"role":"assistant","content":"2"}}]}"#;

    #[tokio::test]
    async fn test_default_request_reaches_backend() {
        let (base_url, recorded) = spawn_backend(StatusCode::OK, OK_REPLY).await;
        let submission = Submission::new(vec![FormField::text("code", "print(1+1)")]);

        let reply = proxy_submission(&config(&base_url, None), &submission)
            .await
            .unwrap();

        let recorded = recorded.lock().unwrap().clone();
        assert_eq!(reply, serde_json::from_str::<serde_json::Value>(OK_REPLY).unwrap());
        assert_eq!(recorded.authorization, None);
        assert_eq!(recorded.content_type.as_deref(), Some("application/json"));
        assert_eq!(
            recorded.body.unwrap(),
            serde_json::json!({
                "model": "llama3",
                "messages": [
                    {"role": "system", "content": "You are a python interpreter."},
                    {"role": "user", "content": "print(1+1)"}
                ],
                "stream": false
            })
        );
    }

    #[tokio::test]
    async fn test_bearer_header_sent_when_key_configured() {
        let (base_url, recorded) = spawn_backend(StatusCode::OK, "{}").await;
        let submission = Submission::new(vec![FormField::text("code", "x")]);

        proxy_submission(&config(&base_url, Some("sk-test")), &submission)
            .await
            .unwrap();

        assert_eq!(
            recorded.lock().unwrap().authorization.as_deref(),
            Some("Bearer sk-test")
        );
    }

    #[tokio::test]
    async fn test_files_do_not_change_outbound_message() {
        let (base_url, recorded) = spawn_backend(StatusCode::OK, "{}").await;
        let submission = Submission::new(vec![
            FormField::text("code", "print(open('a.txt').read())"),
            FormField::file("file", "a.txt", Some("text/plain"), b"hello".to_vec()),
        ]);

        proxy_submission(&config(&base_url, None), &submission)
            .await
            .unwrap();

        let body = recorded.lock().unwrap().body.clone().unwrap();
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
        assert_eq!(
            body["messages"][1]["content"],
            "print(open('a.txt').read())"
        );
    }

    #[tokio::test]
    async fn test_backend_error_status_is_passed_through() {
        let (base_url, _) =
            spawn_backend(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"model not found"}"#)
                .await;
        let submission = Submission::new(vec![FormField::text("code", "x")]);

        let reply = proxy_submission(&config(&base_url, None), &submission)
            .await
            .unwrap();

        assert_eq!(reply, serde_json::json!({"error": "model not found"}));
    }

    #[tokio::test]
    async fn test_non_json_reply_is_response_parse_error() {
        let (base_url, _) = spawn_backend(StatusCode::OK, "<html>bad gateway</html>").await;
        let submission = Submission::new(vec![FormField::text("code", "x")]);

        let err = proxy_submission(&config(&base_url, None), &submission)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ResponseParse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_upstream_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let submission = Submission::new(vec![FormField::text("code", "x")]);
        let err = proxy_submission(&config(&format!("http://{addr}"), None), &submission)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Upstream(_)));
    }

    #[tokio::test]
    async fn test_invalid_api_key_is_invalid_header_error() {
        let submission = Submission::new(vec![FormField::text("code", "x")]);
        let err = proxy_submission(
            &config("http://127.0.0.1:9", Some("bad\nkey")),
            &submission,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::InvalidHeader(_)));
    }
}
