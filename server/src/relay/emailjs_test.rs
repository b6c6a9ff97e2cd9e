use super::*;

fn config(private_key: Option<&str>) -> RelayConfig {
    RelayConfig {
        service_id: "service_abc".into(),
        template_id: "template_xyz".into(),
        public_key: "pk_123".into(),
        private_key: private_key.map(str::to_owned),
        api_url: "https://api.emailjs.com".into(),
    }
}

fn ada() -> ContactForm {
    ContactForm { name: "Ada".into(), email: "ada@x.com".into(), message: "Hello".into() }
}

#[test]
fn request_carries_config_and_template_params() {
    let cfg = config(None);
    let form = ada();
    let json = serde_json::to_value(build_request(&cfg, &form)).unwrap();

    assert_eq!(json["service_id"], "service_abc");
    assert_eq!(json["template_id"], "template_xyz");
    assert_eq!(json["user_id"], "pk_123");
    assert_eq!(json["template_params"]["name"], "Ada");
    assert_eq!(json["template_params"]["email"], "ada@x.com");
    assert_eq!(json["template_params"]["message"], "Hello");
    assert!(json.get("accessToken").is_none());
}

#[test]
fn request_includes_access_token_when_configured() {
    let cfg = config(Some("secret"));
    let form = ada();
    let json = serde_json::to_value(build_request(&cfg, &form)).unwrap();
    assert_eq!(json["accessToken"], "secret");
}

#[test]
fn send_url_appends_api_path() {
    assert_eq!(send_url(&config(None)), "https://api.emailjs.com/api/v1.0/email/send");
}

#[test]
fn client_builds_with_default_timeouts() {
    assert!(EmailJsRelay::new(RelayTimeouts::default()).is_ok());
}

#[tokio::test]
async fn unreachable_relay_is_request_error() {
    let relay = EmailJsRelay::new(RelayTimeouts { request_secs: 2, connect_secs: 1 }).unwrap();
    let mut cfg = config(None);
    cfg.api_url = "http://127.0.0.1:9".into();
    let err = relay.send(&cfg, &ada()).await.unwrap_err();
    assert!(matches!(err, RelayError::Request(_)));
}

#[test]
fn relay_failures_share_one_code_and_retry_only_transient() {
    use crate::error::ErrorCode;

    let build = RelayError::HttpClientBuild("tls".into());
    let transport = RelayError::Request("timeout".into());
    let throttled = RelayError::Response { status: 429, body: String::new() };
    let rejected = RelayError::Response { status: 400, body: String::new() };

    for err in [&build, &transport, &throttled, &rejected] {
        assert_eq!(err.error_code(), "E_RELAY");
    }
    assert!(!build.retryable());
    assert!(transport.retryable());
    assert!(throttled.retryable());
    assert!(!rejected.retryable());
    assert_eq!(RelayError::MissingConfig { vars: vec!["EMAILJS_SERVICE_ID"] }.error_code(), "E_NOT_CONFIGURED");
}
