use app_error::StatusCode;

const REGISTERED: &[(StatusCode, u16, &str)] = &[
    (StatusCode::BadRequest, 400, "Bad Request"),
    (StatusCode::Unauthorized, 401, "Unauthorized"),
    (StatusCode::PaymentRequired, 402, "Payment Required"),
    (StatusCode::Forbidden, 403, "Forbidden"),
    (StatusCode::NotFound, 404, "Not Found"),
    (StatusCode::MethodNotAllowed, 405, "Method Not Allowed"),
    (StatusCode::NotAcceptable, 406, "Not Acceptable"),
    (StatusCode::ProxyAuthenticationRequired, 407, "Proxy Authentication Required"),
    (StatusCode::RequestTimeout, 408, "Request Timeout"),
    (StatusCode::Conflict, 409, "Conflict"),
    (StatusCode::Gone, 410, "Gone"),
    (StatusCode::LengthRequired, 411, "Length Required"),
    (StatusCode::PreconditionFailed, 412, "Precondition Failed"),
    (StatusCode::PayloadTooLarge, 413, "Payload Too Large"),
    (StatusCode::UriTooLong, 414, "URI Too Long"),
    (StatusCode::UnsupportedMediaType, 415, "Unsupported Media Type"),
    (StatusCode::RangeNotSatisfiable, 416, "Range Not Satisfiable"),
    (StatusCode::ExpectationFailed, 417, "Expectation Failed"),
    (StatusCode::ImATeapot, 418, "I'm a teapot"),
    (StatusCode::MisdirectedRequest, 421, "Misdirected Request"),
    (StatusCode::UnprocessableEntity, 422, "Unprocessable Entity"),
    (StatusCode::Locked, 423, "Locked"),
    (StatusCode::FailedDependency, 424, "Failed Dependency"),
    (StatusCode::TooEarly, 425, "Too Early"),
    (StatusCode::UpgradeRequired, 426, "Upgrade Required"),
    (StatusCode::PreconditionRequired, 428, "Precondition Required"),
    (StatusCode::TooManyRequests, 429, "Too Many Requests"),
    (StatusCode::RequestHeaderFieldsTooLarge, 431, "Request Header Fields Too Large"),
    (StatusCode::UnavailableForLegalReasons, 451, "Unavailable For Legal Reasons"),
    (StatusCode::InternalServerError, 500, "Internal Server Error"),
    (StatusCode::NotImplemented, 501, "Not Implemented"),
    (StatusCode::BadGateway, 502, "Bad Gateway"),
    (StatusCode::ServiceUnavailable, 503, "Service Unavailable"),
    (StatusCode::GatewayTimeout, 504, "Gateway Timeout"),
    (StatusCode::HttpVersionNotSupported, 505, "HTTP Version Not Supported"),
    (StatusCode::VariantAlsoNegotiates, 506, "Variant Also Negotiates"),
    (StatusCode::InsufficientStorage, 507, "Insufficient Storage"),
    (StatusCode::LoopDetected, 508, "Loop Detected"),
    (StatusCode::NotExtended, 510, "Not Extended"),
    (StatusCode::NetworkAuthenticationRequired, 511, "Network Authentication Required"),
];

#[test]
fn numeric_values_match_the_registered_set() {
    for (status, value, _) in REGISTERED {
        assert_eq!(status.as_u16(), *value);
        assert_eq!(StatusCode::from_u16(*value), Some(*status));
    }
}

#[test]
fn reason_phrases_are_canonical() {
    for (status, _, reason) in REGISTERED {
        assert_eq!(status.canonical_reason(), *reason);
    }
}

#[test]
fn unassigned_and_out_of_range_values_are_rejected() {
    for value in [0, 99, 200, 302, 399, 419, 420, 427, 430, 432, 450, 452, 509, 512, 600] {
        assert_eq!(StatusCode::from_u16(value), None, "{value} should be rejected");
    }
}

#[test]
fn range_predicates_partition_the_set() {
    for (status, value, _) in REGISTERED {
        assert_eq!(status.is_client_error(), *value < 500);
        assert_eq!(status.is_server_error(), *value >= 500);
        assert_ne!(status.is_client_error(), status.is_server_error());
    }
}

#[test]
fn transient_statuses_are_the_retry_worthy_ones() {
    let transient = [
        StatusCode::RequestTimeout,
        StatusCode::TooManyRequests,
        StatusCode::BadGateway,
        StatusCode::ServiceUnavailable,
        StatusCode::GatewayTimeout,
    ];

    for (status, _, _) in REGISTERED {
        assert_eq!(status.is_transient(), transient.contains(status));
    }
}

#[test]
fn display_shows_value_and_reason() {
    assert_eq!(StatusCode::NotFound.to_string(), "404 Not Found");
    assert_eq!(StatusCode::ImATeapot.to_string(), "418 I'm a teapot");
    assert_eq!(
        StatusCode::NetworkAuthenticationRequired.to_string(),
        "511 Network Authentication Required"
    );
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_the_bare_number() {
        let json = serde_json::to_string(&StatusCode::NotFound).unwrap();
        assert_eq!(json, "404");
    }

    #[test]
    fn deserializes_registered_values() {
        let status: StatusCode = serde_json::from_str("503").unwrap();
        assert_eq!(status, StatusCode::ServiceUnavailable);
    }

    #[test]
    fn deserialization_rejects_values_outside_the_closed_set() {
        assert!(serde_json::from_str::<StatusCode>("509").is_err());
        assert!(serde_json::from_str::<StatusCode>("200").is_err());
        assert!(serde_json::from_str::<StatusCode>("\"404\"").is_err());
    }

    #[test]
    fn round_trips_every_variant() {
        for (status, _, _) in REGISTERED {
            let json = serde_json::to_string(status).unwrap();
            let back: StatusCode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *status);
        }
    }
}
