use barberbook_client::http::decode_body;
use barberbook_core::errors::BookingError;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use rstest::rstest;

#[test]
fn success_json_body_is_parsed() {
    let value = decode_body(
        StatusCode::OK,
        Some("application/json"),
        r#"{"id": 3, "name": "Fade Factory"}"#,
    )
    .unwrap();

    assert_eq!(value["name"], "Fade Factory");
}

#[test]
fn success_text_body_is_wrapped_as_message() {
    let value = decode_body(StatusCode::OK, Some("text/plain"), "all good").unwrap();
    assert_eq!(value["message"], "all good");
}

#[test]
fn failure_surfaces_the_server_message() {
    let err = decode_body(
        StatusCode::BAD_REQUEST,
        Some("application/json"),
        r#"{"message": "Time slot is already booked"}"#,
    )
    .unwrap_err();

    match err {
        BookingError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Time slot is already booked");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[rstest]
#[case(StatusCode::INTERNAL_SERVER_ERROR, "HTTP 500: Internal Server Error")]
#[case(StatusCode::NOT_FOUND, "HTTP 404: Not Found")]
fn failure_without_message_falls_back_to_status_line(
    #[case] status: StatusCode,
    #[case] expected: &str,
) {
    let err = decode_body(status, Some("application/json"), "{}").unwrap_err();
    match err {
        BookingError::Api { message, .. } => assert_eq!(message, expected),
        other => panic!("expected api error, got {other:?}"),
    }
}

#[test]
fn failure_with_empty_message_falls_back_too() {
    let err = decode_body(
        StatusCode::UNAUTHORIZED,
        Some("application/json"),
        r#"{"message": ""}"#,
    )
    .unwrap_err();

    match err {
        BookingError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "HTTP 401: Unauthorized");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[test]
fn failure_with_text_body_uses_the_text() {
    let err = decode_body(StatusCode::FORBIDDEN, Some("text/html"), "access denied").unwrap_err();
    match err {
        BookingError::Api { message, .. } => assert_eq!(message, "access denied"),
        other => panic!("expected api error, got {other:?}"),
    }
}

#[test]
fn malformed_json_on_failure_still_produces_an_error() {
    let err = decode_body(
        StatusCode::BAD_GATEWAY,
        Some("application/json"),
        "<html>gateway</html>",
    )
    .unwrap_err();

    match err {
        BookingError::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "<html>gateway</html>");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}
