use http::StatusCode;
use http_rail::traits::HttpResultExt;
use http_rail::{HttpError, Settings, StackConfig};

#[test]
fn test_or_status_on_ok() {
    let result: Result<i32, std::io::Error> = Ok(42);
    assert_eq!(result.or_status(StatusCode::BAD_GATEWAY).unwrap(), 42);
}

#[test]
fn test_or_status_on_err() {
    let result: Result<(), std::io::Error> = Err(std::io::Error::other("reset"));
    let err = result.or_status(StatusCode::BAD_GATEWAY).unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(err.message(), "Bad Gateway");
    assert_eq!(err.to_string(), "Bad Gateway: reset");
}

#[test]
fn test_or_status_with_resolver() {
    let settings = Settings::default().with_stack(StackConfig::disabled()).with_status_resolver(
        |cause: &(dyn std::error::Error + 'static), fallback: StatusCode| {
            if cause.to_string().contains("timeout") {
                StatusCode::GATEWAY_TIMEOUT
            } else {
                fallback
            }
        },
    );

    let timed_out: Result<(), &str> = Err("upstream timeout");
    let err = timed_out.or_status_with(&settings, StatusCode::BAD_GATEWAY).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::GATEWAY_TIMEOUT);

    let refused: Result<(), &str> = Err("refused");
    let err = refused.or_status_with(&settings, StatusCode::BAD_GATEWAY).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_or_status_captures_the_calling_line() {
    let settings = Settings::default().with_stack(StackConfig::default().with_max_depth(1));
    let result: Result<(), String> = Err("boom".to_owned());

    let (wrapped, line) = (result.or_status_with(&settings, StatusCode::BAD_REQUEST), line!());
    let err: HttpError = wrapped.unwrap_err();
    assert_eq!(err.stack_info().frames()[0].line(), line);
}

#[test]
fn test_question_mark_in_handlers() {
    fn parse(raw: &str) -> Result<u32, HttpError> {
        let value = raw.parse::<u32>().or_status(StatusCode::BAD_REQUEST)?;
        Ok(value * 2)
    }

    assert_eq!(parse("21").unwrap(), 42);
    let err = parse("x").unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert!(err.cause().is_some());
}
