use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use futures::future::BoxFuture;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use wiz_hue_bridge::{
    AppState, ClientFactory, DeviceSession, Error, LightClient, LightStatus, Payload, PowerMode,
    router,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Connect(String),
    TurnOn(Option<Payload>),
    TurnOff,
    Toggle,
    UpdateState,
}

/// A simulated bulb that records every call made against it.
struct MockBulb {
    calls: Mutex<Vec<Call>>,
    on: Mutex<bool>,
    responsive: bool,
}

impl MockBulb {
    fn new(on: bool) -> Arc<Self> {
        Arc::new(MockBulb {
            calls: Mutex::new(Vec::new()),
            on: Mutex::new(on),
            responsive: true,
        })
    }

    fn silent() -> Arc<Self> {
        Arc::new(MockBulb {
            calls: Mutex::new(Vec::new()),
            on: Mutex::new(false),
            responsive: false,
        })
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

struct MockClient(Arc<MockBulb>);

impl MockClient {
    fn reply<T: Send + 'static>(&self, call: Call, value: T) -> BoxFuture<'static, Result<T, Error>> {
        self.0.calls.lock().unwrap().push(call);
        let responsive = self.0.responsive;
        Box::pin(async move {
            if !responsive {
                futures::future::pending::<()>().await;
            }
            Ok(value)
        })
    }

    fn set_on(&self, on: bool) {
        *self.0.on.lock().unwrap() = on;
    }
}

impl LightClient for MockClient {
    fn turn_on<'a>(&'a self, payload: Option<&'a Payload>) -> BoxFuture<'a, Result<(), Error>> {
        self.set_on(true);
        self.reply(Call::TurnOn(payload.cloned()), ())
    }

    fn turn_off(&self) -> BoxFuture<'_, Result<(), Error>> {
        self.set_on(false);
        self.reply(Call::TurnOff, ())
    }

    fn toggle(&self) -> BoxFuture<'_, Result<(), Error>> {
        let on = *self.0.on.lock().unwrap();
        self.set_on(!on);
        self.reply(Call::Toggle, ())
    }

    fn update_state(&self) -> BoxFuture<'_, Result<LightStatus, Error>> {
        let power = if *self.0.on.lock().unwrap() {
            PowerMode::On
        } else {
            PowerMode::Off
        };
        self.reply(Call::UpdateState, LightStatus::from(&power))
    }
}

struct MockFactory(Arc<MockBulb>);

impl ClientFactory for MockFactory {
    fn connect(&self, address: &str) -> Box<dyn LightClient> {
        self.0
            .calls
            .lock()
            .unwrap()
            .push(Call::Connect(address.to_string()));
        Box::new(MockClient(Arc::clone(&self.0)))
    }
}

fn app(bulb: &Arc<MockBulb>, domain: Option<&str>) -> Router {
    let session = DeviceSession::new(Arc::new(MockFactory(Arc::clone(bulb))));
    router(AppState::new(domain, session))
}

async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    send_as(app, method, uri, Some("application/json"), body).await
}

async fn send_as(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }
    let request = request.body(Body::from(body.to_string())).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_index() {
    let bulb = MockBulb::new(false);
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app(&bulb, None).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Hi :) \n Wiz Light API");
}

#[tokio::test]
async fn test_turn_on_returns_reported_state() {
    let bulb = MockBulb::new(false);
    let (status, body) = send(
        app(&bulb, None),
        Method::PUT,
        "/api/lights/10.0.0.5/state",
        r#"{"on": true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": {"/lights/10.0.0.5/state/on": true}}));
    assert_eq!(
        bulb.calls(),
        [
            Call::Connect("10.0.0.5".to_string()),
            Call::TurnOn(None),
            Call::UpdateState,
        ]
    );
}

#[tokio::test]
async fn test_turn_off_ignores_attributes() {
    let bulb = MockBulb::new(true);
    let (status, body) = send(
        app(&bulb, Some("home.arpa")),
        Method::PUT,
        "/api/lights/bulb1/state",
        r#"{"on": false, "bri": 100, "wiz_scene": "Ocean"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": {"/lights/bulb1/state/on": false}}));
    assert_eq!(
        bulb.calls(),
        [
            Call::Connect("bulb1.home.arpa".to_string()),
            Call::TurnOff,
            Call::UpdateState,
        ]
    );
}

#[tokio::test]
async fn test_scene_and_brightness_sent_as_one_pilot() {
    let bulb = MockBulb::new(false);
    let (status, _) = send(
        app(&bulb, None),
        Method::PUT,
        "/api/lights/bulb1/state",
        r#"{"on": true, "wiz_scene": "Ocean", "bri": 255}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let calls = bulb.calls();
    let Call::TurnOn(Some(payload)) = &calls[1] else {
        panic!("expected a pilot, got {calls:?}");
    };
    assert_eq!(payload.scene_id(), Some(1));
    assert_eq!(payload.dimming(), Some(100));
}

#[tokio::test]
async fn test_post_is_accepted_for_state() {
    let bulb = MockBulb::new(false);
    let (status, _) = send(
        app(&bulb, None),
        Method::POST,
        "/api/lights/bulb1/state",
        r#"{"on": true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_brightness_makes_no_calls() {
    let bulb = MockBulb::new(false);
    let (status, body) = send(
        app(&bulb, None),
        Method::PUT,
        "/api/lights/bulb1/state",
        r#"{"bri": 400}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid Brightness Value"}));
    assert!(bulb.calls().is_empty());
}

#[tokio::test]
async fn test_validation_error_messages() {
    let cases = [
        ("", "Invalid JSON Payload"),
        ("not json", "Invalid JSON Payload"),
        ("[1, 2]", "Invalid JSON Payload"),
        (r#"{"on": "yes"}"#, "Missing key fields in request"),
        (r#"{"wiz_scene": "Disco"}"#, "Missing key fields in request"),
        (r#"{"bri": -1}"#, "Invalid Brightness Value"),
        ("{}", "No state changes provided"),
    ];

    for (body, message) in cases {
        let bulb = MockBulb::new(false);
        let (status, response) =
            send(app(&bulb, None), Method::PUT, "/api/lights/bulb1/state", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(response, json!({"error": message}), "body {body:?}");
        assert!(bulb.calls().is_empty());
    }
}

#[tokio::test]
async fn test_body_must_be_declared_json() {
    let cases = [
        None,
        Some("text/plain"),
        Some("application/x-www-form-urlencoded"),
    ];

    for content_type in cases {
        let bulb = MockBulb::new(false);
        let (status, response) = send_as(
            app(&bulb, None),
            Method::PUT,
            "/api/lights/bulb1/state",
            content_type,
            r#"{"on": true}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "type {content_type:?}");
        assert_eq!(response, json!({"error": "Invalid JSON Payload"}));
        assert!(bulb.calls().is_empty());
    }
}

#[tokio::test]
async fn test_json_content_type_with_charset() {
    let bulb = MockBulb::new(false);
    let (status, _) = send_as(
        app(&bulb, None),
        Method::PUT,
        "/api/lights/bulb1/state",
        Some("application/json; charset=utf-8"),
        r#"{"on": true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn test_unresponsive_light_times_out() {
    let bulb = MockBulb::silent();
    let started = tokio::time::Instant::now();
    let (status, body) = send(
        app(&bulb, None),
        Method::PUT,
        "/api/lights/10.0.0.5/state",
        r#"{"on": true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({"error": "Timeout while attempting to communicate with light."})
    );
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(5));
    assert!(elapsed < Duration::from_secs(6));
    assert_eq!(
        bulb.calls(),
        [Call::Connect("10.0.0.5".to_string()), Call::TurnOn(None)]
    );
}

#[tokio::test]
async fn test_toggle_then_refresh() {
    let bulb = MockBulb::new(true);
    let (status, body) = send(
        app(&bulb, Some("lan")),
        Method::PUT,
        "/api/lights/bulb1/state/on/toggle",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": {"/lights/bulb1/state/on": false}}));
    assert_eq!(
        bulb.calls(),
        [
            Call::Connect("bulb1.lan".to_string()),
            Call::Toggle,
            Call::UpdateState,
        ]
    );
}

#[tokio::test]
async fn test_toggle_ignores_body() {
    let bulb = MockBulb::new(false);
    let (status, body) = send(
        app(&bulb, None),
        Method::PUT,
        "/api/lights/bulb1/state/on/toggle",
        r#"{"bri": 400}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": {"/lights/bulb1/state/on": true}}));
}

#[tokio::test(start_paused = true)]
async fn test_toggle_timeout() {
    let bulb = MockBulb::silent();
    let (status, _) = send(
        app(&bulb, None),
        Method::PUT,
        "/api/lights/bulb1/state/on/toggle",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        bulb.calls(),
        [Call::Connect("bulb1".to_string()), Call::Toggle]
    );
}
