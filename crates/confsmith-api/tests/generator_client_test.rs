// Integration tests for `GeneratorClient` using wiremock.

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use confsmith_api::{ConfigRequest, DirectoryNumber, GeneratorClient};

// ── Helpers ─────────────────────────────────────────────────────────

fn sample_request() -> ConfigRequest {
    ConfigRequest {
        routing_protocol: "OSPF".into(),
        proto: String::new(),
        router_id: "1.1.1.1".into(),
        ip_multicast: false,
        telephony_enabled: false,
        dn_list: vec![DirectoryNumber::default(); 3],
        enable_ssh: true,
        hostname: "MyRouter".into(),
        enable_secret: "cisco123".into(),
        console_password: String::new(),
        vty_password: String::new(),
        dhcp_network: String::new(),
        dhcp_mask: String::new(),
        dhcp_gateway: String::new(),
        dhcp_dns: String::new(),
        interfaces: vec!["GigabitEthernet0/0".into()],
        networks: vec![("192.168.1.1".into(), "255.255.255.0".into())],
        no_shutdown_interfaces: vec!["GigabitEthernet0/0".into()],
        max_ephones: 3,
        max_dn: 3,
        ip_source_address: "10.0.0.1".into(),
        auto_assign_range: "1 to 3".into(),
        dhcp_excluded: ("10.0.0.1".into(), "10.0.0.10".into()),
    }
}

async fn setup() -> (MockServer, GeneratorClient) {
    let server = MockServer::start().await;
    let endpoint = format!("{}/generate", server.uri())
        .parse()
        .expect("mock server URI should parse");
    let client = GeneratorClient::with_client(reqwest::Client::new(), endpoint);
    (server, client)
}

// ── Response classification ─────────────────────────────────────────

#[tokio::test]
async fn submit_returns_generated_text() {
    let (server, client) = setup().await;

    let config_text = "hostname MyRouter\ninterface GigabitEthernet0/0\n end";
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string(config_text))
        .mount(&server)
        .await;

    assert!(client.endpoint().as_str().ends_with("/generate"));
    assert!(!client.is_busy());

    let text = client
        .submit(&sample_request())
        .await
        .expect("submission should succeed");
    assert_eq!(text, config_text);
    assert!(!client.is_busy());
}

#[tokio::test]
async fn submit_classifies_failure_marker() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\u{274c} invalid"))
        .mount(&server)
        .await;

    let err = client
        .submit(&sample_request())
        .await
        .expect_err("marker body should be an error");

    assert!(err.is_generator_failure());
    match err {
        confsmith_api::Error::Generator { message } => {
            assert!(message.contains("invalid"));
        }
        other => panic!("expected Generator error, got {other:?}"),
    }
}

#[tokio::test]
async fn submit_surfaces_http_errors_as_transport() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client
        .submit(&sample_request())
        .await
        .expect_err("500 should be an error");

    assert!(!err.is_generator_failure());
    assert!(matches!(err, confsmith_api::Error::Transport(_)));
}

#[tokio::test]
async fn submit_connection_refused_is_transient_transport_error() {
    // Nothing listens on this port; the connect attempt itself fails.
    let endpoint = "http://127.0.0.1:9/generate"
        .parse()
        .expect("static URL should parse");
    let client = GeneratorClient::with_client(reqwest::Client::new(), endpoint);

    let err = client
        .submit(&sample_request())
        .await
        .expect_err("connection should fail");

    assert!(err.is_transient());
    assert!(!err.is_generator_failure());
}

// ── Request shape ───────────────────────────────────────────────────

#[tokio::test]
async fn submit_sends_named_fields() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_partial_json(serde_json::json!({
            "routing_protocol": "OSPF",
            "proto": "",
            "router_id": "1.1.1.1",
            "hostname": "MyRouter",
            "interfaces": ["GigabitEthernet0/0"],
            "networks": [["192.168.1.1", "255.255.255.0"]],
            "no_shutdown_interfaces": ["GigabitEthernet0/0"],
            "max_ephones": 3,
            "max_dn": 3,
            "ip_source_address": "10.0.0.1",
            "auto_assign_range": "1 to 3",
            "dhcp_excluded": ["10.0.0.1", "10.0.0.10"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("end"))
        .expect(1)
        .mount(&server)
        .await;

    client
        .submit(&sample_request())
        .await
        .expect("submission should succeed");
}

#[tokio::test]
async fn request_round_trips_through_json() {
    let request = sample_request();
    let json = serde_json::to_string(&request).expect("serialize");
    let back: ConfigRequest = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, request);
}
