//! Classification and display tests for the gateway error taxonomy.

use std::time::Duration;

use bookgate::GatewayError;

// ============================================================================
// Status-code classification
// ============================================================================

#[test]
fn status_401_is_unauthorized() {
    assert!(matches!(
        GatewayError::from_status(401, None),
        GatewayError::Unauthorized
    ));
}

#[test]
fn status_4xx_is_bad_request_with_status() {
    for status in [400, 403, 404, 422] {
        let err = GatewayError::from_status(status, None);
        assert!(
            matches!(err, GatewayError::BadRequest { status: s } if s == status),
            "status {status} misclassified as {err:?}"
        );
    }
}

#[test]
fn status_429_is_overloaded_with_hint() {
    let err = GatewayError::from_status(429, Some(Duration::from_secs(2)));
    assert!(matches!(err, GatewayError::Overloaded { .. }));
    assert_eq!(err.retry_after(), Some(Duration::from_secs(2)));
}

#[test]
fn status_5xx_is_unavailable() {
    for status in [500, 502, 503, 504] {
        let err = GatewayError::from_status(status, None);
        assert!(
            matches!(err, GatewayError::UpstreamUnavailable { status: s } if s == status),
            "status {status} misclassified as {err:?}"
        );
    }
}

#[test]
fn status_outside_error_ranges_is_unknown() {
    assert!(matches!(
        GatewayError::from_status(302, None),
        GatewayError::Unknown(_)
    ));
}

// ============================================================================
// Retry predicate
// ============================================================================

#[test]
fn transient_conditions() {
    assert!(GatewayError::Overloaded { retry_after: None }.is_transient());
    assert!(GatewayError::UpstreamUnavailable { status: 503 }.is_transient());
    assert!(GatewayError::Timeout.is_transient());
    assert!(GatewayError::NetworkUnreachable.is_transient());
}

#[test]
fn permanent_conditions() {
    assert!(!GatewayError::Unauthorized.is_transient());
    assert!(!GatewayError::BadRequest { status: 404 }.is_transient());
    assert!(!GatewayError::UpstreamUnavailable { status: 500 }.is_transient());
    assert!(!GatewayError::UpstreamUnavailable { status: 502 }.is_transient());
    assert!(!GatewayError::TlsValidationFailed("bad cert".into()).is_transient());
    assert!(!GatewayError::InvalidInput("empty".into()).is_transient());
    assert!(!GatewayError::Unknown("???".into()).is_transient());
}

#[test]
fn retry_after_only_from_overloaded() {
    let hint = Some(Duration::from_secs(5));
    assert_eq!(
        GatewayError::Overloaded { retry_after: hint }.retry_after(),
        hint
    );
    assert_eq!(GatewayError::Timeout.retry_after(), None);
    assert_eq!(
        GatewayError::UpstreamUnavailable { status: 503 }.retry_after(),
        None
    );
}

// ============================================================================
// Messages
// ============================================================================

#[test]
fn tls_failure_message_points_at_trust_configuration() {
    let msg = GatewayError::TlsValidationFailed("self-signed certificate".into()).to_string();
    assert!(msg.contains("CA bundle"), "message was: {msg}");
    assert!(msg.contains("TLS_REJECT_UNAUTHORIZED"), "message was: {msg}");
    assert!(msg.contains("self-signed certificate"), "message was: {msg}");
}

#[test]
fn bad_request_message_includes_status() {
    let msg = GatewayError::BadRequest { status: 404 }.to_string();
    assert!(msg.contains("404"), "message was: {msg}");
}

#[test]
fn unavailable_message_includes_status() {
    let msg = GatewayError::UpstreamUnavailable { status: 502 }.to_string();
    assert!(msg.contains("502"), "message was: {msg}");
}
