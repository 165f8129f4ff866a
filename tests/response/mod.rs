use http::StatusCode;
use http_rail::{
    ErrorBody, HttpError, ResponseRecorder, Settings, StackConfig, Visibility, WriteError,
};
use serde::ser::{Error as _, Serializer};
use serde::Serialize;
use serde_json::{json, Value};


fn quiet() -> Settings {
    Settings::default().with_stack(StackConfig::disabled())
}

fn write(err: &HttpError, settings: &Settings) -> ResponseRecorder {
    let mut recorder = ResponseRecorder::new();
    err.write(settings, &mut recorder).unwrap();
    recorder
}

struct Unencodable;

impl Serialize for Unencodable {
    fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("refusing to encode"))
    }
}

#[test]
fn not_found_with_default_settings() {
    let err = HttpError::not_found("widget not found");
    let recorder = write(&err, &Settings::default());

    assert_eq!(recorder.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(recorder.header("content-type"), Some("application/json"));
    assert_eq!(recorder.body_str(), Some(r#"{"$error":"widget not found"}"#));
}

#[test]
fn moved_permanently_sets_location() {
    let err = HttpError::moved_permanently("", "https://example.com/widgets/7");
    let recorder = write(&err, &Settings::default());

    assert_eq!(recorder.status(), Some(StatusCode::MOVED_PERMANENTLY));
    assert_eq!(recorder.header("location"), Some("https://example.com/widgets/7"));
    assert_eq!(recorder.late_headers(), 0);
}

#[test]
fn hidden_internals_leave_only_error_and_reasons() {
    let err = Settings::default()
        .new_error(StatusCode::BAD_GATEWAY, "upstream failed")
        .with_cause(std::io::Error::other("connection reset"))
        .add_reason("retry later");
    assert!(!err.stack_info().is_empty());

    let body: Value = write(&err, &Settings::default()).json().unwrap();
    assert_eq!(body, json!({ "$error": "upstream failed", "$reasons": ["retry later"] }));
}

#[test]
fn show_cause_adds_the_cause_message() {
    let err = quiet()
        .new_error(StatusCode::BAD_GATEWAY, "upstream failed")
        .with_cause(std::io::Error::other("connection reset"));
    let body: Value = write(&err, &quiet().show_cause(true)).json().unwrap();

    assert_eq!(body, json!({ "$error": "upstream failed", "$cause": "connection reset" }));
}

#[test]
fn nested_http_cause_contributes_only_its_message() {
    let inner = quiet()
        .new_error(StatusCode::NOT_FOUND, "row missing")
        .with_cause(std::io::Error::other("eof"));
    let err = quiet().new_error(StatusCode::INTERNAL_SERVER_ERROR, "lookup").with_cause(inner);
    let body: Value = write(&err, &quiet().show_cause(true)).json().unwrap();

    assert_eq!(body, json!({ "$error": "lookup", "$cause": "row missing" }));
    assert_eq!(err.body(Visibility::all()).unwrap().cause.as_deref(), Some("row missing"));
}

#[test]
fn show_cause_without_a_cause_omits_the_field() {
    let err = quiet().new_error(StatusCode::CONFLICT, "");
    let body: Value = write(&err, &quiet().show_cause(true)).json().unwrap();
    assert_eq!(body, json!({ "$error": "Conflict" }));
}

#[test]
fn show_stack_lists_frames() {
    let settings = Settings::default()
        .with_stack(StackConfig::default().with_max_depth(2))
        .show_stack(true);
    let err = settings.new_error(StatusCode::INTERNAL_SERVER_ERROR, "");
    let body: ErrorBody = write(&err, &settings).json().unwrap();

    assert_eq!(body.error, "Internal Server Error");
    assert_eq!(body.stack, err.stack_info().lines());
    assert!(!body.stack.is_empty());
    assert!(body.cause.is_none());
}

#[test]
fn show_stack_with_empty_snapshot_omits_the_field() {
    let err = quiet().new_error(StatusCode::INTERNAL_SERVER_ERROR, "");
    let body: Value = write(&err, &quiet().show_stack(true)).json().unwrap();
    assert!(body.get("$stack").is_none());
}

#[test]
fn custom_headers_are_written_before_the_status() {
    let err = quiet()
        .new_error(StatusCode::TOO_MANY_REQUESTS, "")
        .add_header("Retry-After", "30")
        .add_header("X-RateLimit-Limit", "100");
    let recorder = write(&err, &quiet());

    assert_eq!(recorder.header("retry-after"), Some("30"));
    assert_eq!(recorder.header("x-ratelimit-limit"), Some("100"));
    assert_eq!(recorder.late_headers(), 0);
}

#[test]
fn reasons_are_serialized_verbatim() {
    let err = quiet()
        .new_error(StatusCode::UNPROCESSABLE_ENTITY, "")
        .add_reasons(["a", "b"])
        .add_reason("c")
        .add_reason(json!({ "field": "email", "code": 7 }));
    let body: Value = write(&err, &quiet()).json().unwrap();

    assert_eq!(body["$reasons"], json!(["a", "b", "c", { "field": "email", "code": 7 }]));
}

#[test]
fn encode_failure_propagates() {
    let err = quiet().new_error(StatusCode::BAD_REQUEST, "").add_reason(Unencodable);
    let mut recorder = ResponseRecorder::new();

    let result = err.write(&quiet(), &mut recorder);
    assert!(matches!(result, Err(WriteError::Encode(_))));
    assert_eq!(recorder.status(), None);
    assert!(recorder.body().is_empty());
}

#[test]
fn invalid_custom_header_propagates() {
    let err = quiet().new_error(StatusCode::BAD_REQUEST, "").add_header("bad header", "x");
    let mut recorder = ResponseRecorder::new();

    let result = err.write(&quiet(), &mut recorder);
    assert!(matches!(result, Err(WriteError::InvalidHeaderName { .. })));
}

#[test]
fn no_writer_writes_headers_and_bare_status() {
    let settings = quiet().without_error_writer();
    let err = settings.new_error(StatusCode::SEE_OTHER, "").with_location("/elsewhere");
    let recorder = write(&err, &settings);

    assert_eq!(recorder.status(), Some(StatusCode::SEE_OTHER));
    assert_eq!(recorder.header("location"), Some("/elsewhere"));
    assert_eq!(recorder.header("content-type"), None);
    assert!(recorder.body().is_empty());
}

#[test]
fn to_response_builds_an_http_response() {
    let err = quiet().new_error(StatusCode::GONE, "").add_header("X-Trace", "abc");
    let response = err.to_response(&quiet()).unwrap();

    assert_eq!(response.status(), StatusCode::GONE);
    assert_eq!(response.headers()["x-trace"], "abc");
    assert_eq!(response.headers()["content-type"], "application/json");
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body, json!({ "$error": "Gone" }));
}

#[test]
fn body_honours_visibility() {
    let err = Settings::default()
        .with_stack(StackConfig::default().with_max_depth(1))
        .new_error(StatusCode::BAD_GATEWAY, "")
        .with_cause(std::io::Error::other("eof"));

    let hidden = err.body(Visibility::hidden()).unwrap();
    assert_eq!(hidden, ErrorBody::new("Bad Gateway"));

    let all = err.body(Visibility::all()).unwrap();
    assert_eq!(all.cause.as_deref(), Some("eof"));
    assert_eq!(all.stack.len(), 1);
}

#[test]
fn serialize_uses_the_public_body() {
    let err = quiet()
        .new_error(StatusCode::BAD_REQUEST, "")
        .with_cause(std::io::Error::other("secret"))
        .add_reason("missing id");

    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({ "$error": "Bad Request", "$reasons": ["missing id"] })
    );

    let broken = quiet().new_error(StatusCode::BAD_REQUEST, "").add_reason(Unencodable);
    assert!(serde_json::to_string(&broken).is_err());
}
