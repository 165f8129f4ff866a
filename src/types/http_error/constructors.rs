//! One constructor per well-known status.
//!
//! Every constructor is `#[track_caller]`, so the captured stack starts at the
//! code that called it. An empty message falls back to the reason phrase.

use http::StatusCode;

use crate::types::{BoxError, HttpError};

macro_rules! message_constructors {
    ($($name:ident => $status:ident,)*) => {
        impl HttpError {
            $(
                #[doc = concat!("Creates a `", stringify!($status), "` error.")]
                #[track_caller]
                pub fn $name(message: impl Into<String>) -> Self {
                    Self::new(StatusCode::$status, message)
                }
            )*
        }
    };
}

macro_rules! cause_constructors {
    ($($name:ident => $status:ident,)*) => {
        impl HttpError {
            $(
                #[doc = concat!("Creates a `", stringify!($status), "` error with an optional cause.")]
                #[track_caller]
                pub fn $name<E>(message: impl Into<String>, cause: Option<E>) -> Self
                where
                    E: Into<BoxError>,
                {
                    let mut err = Self::new(StatusCode::$status, message);
                    if let Some(cause) = cause {
                        err.set_cause(cause);
                    }
                    err
                }
            )*
        }
    };
}

macro_rules! redirect_constructors {
    ($($name:ident => $status:ident,)*) => {
        impl HttpError {
            $(
                #[doc = concat!(
                    "Creates a `", stringify!($status),
                    "` redirect; a non-empty `location` becomes the `Location` header."
                )]
                #[track_caller]
                pub fn $name(message: impl Into<String>, location: impl Into<String>) -> Self {
                    Self::new(StatusCode::$status, message).with_location(location)
                }
            )*
        }
    };
}

message_constructors! {
    bad_request => BAD_REQUEST,
    unauthorized => UNAUTHORIZED,
    payment_required => PAYMENT_REQUIRED,
    forbidden => FORBIDDEN,
    not_found => NOT_FOUND,
    method_not_allowed => METHOD_NOT_ALLOWED,
    not_acceptable => NOT_ACCEPTABLE,
    proxy_auth_required => PROXY_AUTHENTICATION_REQUIRED,
    request_timeout => REQUEST_TIMEOUT,
    conflict => CONFLICT,
    gone => GONE,
    length_required => LENGTH_REQUIRED,
    precondition_failed => PRECONDITION_FAILED,
    payload_too_large => PAYLOAD_TOO_LARGE,
    uri_too_long => URI_TOO_LONG,
    unsupported_media_type => UNSUPPORTED_MEDIA_TYPE,
    range_not_satisfiable => RANGE_NOT_SATISFIABLE,
    expectation_failed => EXPECTATION_FAILED,
    misdirected_request => MISDIRECTED_REQUEST,
    unprocessable_entity => UNPROCESSABLE_ENTITY,
    locked => LOCKED,
    failed_dependency => FAILED_DEPENDENCY,
    upgrade_required => UPGRADE_REQUIRED,
    precondition_required => PRECONDITION_REQUIRED,
    too_many_requests => TOO_MANY_REQUESTS,
    request_header_fields_too_large => REQUEST_HEADER_FIELDS_TOO_LARGE,
    unavailable_for_legal_reasons => UNAVAILABLE_FOR_LEGAL_REASONS,
    not_implemented => NOT_IMPLEMENTED,
    gateway_timeout => GATEWAY_TIMEOUT,
    http_version_not_supported => HTTP_VERSION_NOT_SUPPORTED,
    variant_also_negotiates => VARIANT_ALSO_NEGOTIATES,
    not_extended => NOT_EXTENDED,
    network_auth_required => NETWORK_AUTHENTICATION_REQUIRED,
    not_modified => NOT_MODIFIED,
}

cause_constructors! {
    internal_server_error => INTERNAL_SERVER_ERROR,
    bad_gateway => BAD_GATEWAY,
    service_unavailable => SERVICE_UNAVAILABLE,
    insufficient_storage => INSUFFICIENT_STORAGE,
    loop_detected => LOOP_DETECTED,
}

redirect_constructors! {
    multiple_choices => MULTIPLE_CHOICES,
    moved_permanently => MOVED_PERMANENTLY,
    found => FOUND,
    see_other => SEE_OTHER,
    temporary_redirect => TEMPORARY_REDIRECT,
    permanent_redirect => PERMANENT_REDIRECT,
}

impl HttpError {
    /// Sets the `Location` header unless `location` is empty.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        let location = location.into();
        if !location.is_empty() {
            self.insert_header("Location", location);
        }
        self
    }
}
