//! Outbound TLS trust policy.
//!
//! [`TlsTrust`] is derived once from [`Settings`] at service construction
//! and applied to every outbound HTTPS client for the service's lifetime.
//! It covers two customisations: a custom CA bundle (inline certificate or
//! file) and disabled certificate verification.
//!
//! Trust loading never aborts startup. An unreadable or unparseable CA
//! bundle degrades to platform trust with a warning; the failure surfaces
//! later as a classified TLS error if the upstream certificate really did
//! need the missing bundle.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Certificate;
use tracing::warn;

use crate::config::Settings;

/// PEM header marker used to distinguish literal PEM text from
/// base64-encoded certificate bytes.
const PEM_MARKER: &str = "-----BEGIN";

/// TLS trust policy for outbound HTTPS calls.
///
/// Read-only after construction and safe to share across concurrent calls.
#[derive(Debug, Clone)]
pub struct TlsTrust {
    accept_invalid_certs: bool,
    ca: Option<Certificate>,
}

impl TlsTrust {
    /// Build the trust policy from configuration.
    ///
    /// Returns `None` when no customisation was requested, i.e. no CA
    /// material loaded and verification not explicitly disabled; callers
    /// then use platform trust unchanged. An inline certificate takes
    /// priority over a file path when both are configured.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let ca = load_ca_bundle(settings);
        let accept_invalid_certs = settings.reject_unauthorized == Some(false);
        if accept_invalid_certs {
            warn!("TLS certificate validation is disabled for outbound requests");
        }
        if ca.is_none() && !accept_invalid_certs {
            return None;
        }
        Some(Self {
            accept_invalid_certs,
            ca,
        })
    }

    /// Whether a custom CA bundle was loaded.
    pub fn has_ca_bundle(&self) -> bool {
        self.ca.is_some()
    }

    /// Whether certificate verification is disabled.
    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Apply the policy to a reqwest client builder.
    pub(crate) fn apply(&self, mut builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
        if let Some(ca) = &self.ca {
            builder = builder.add_root_certificate(ca.clone());
        }
        if self.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        builder
    }
}

/// Load CA material from settings, if any.
///
/// Inline certificate first, then file path. All failures are logged and
/// collapse to `None` (platform trust).
fn load_ca_bundle(settings: &Settings) -> Option<Certificate> {
    if let Some(cert) = settings.ca_cert.as_deref() {
        return parse_inline_cert(cert);
    }
    let path = settings.ca_file.as_deref()?;
    match std::fs::read(path) {
        Ok(bytes) => parse_cert_bytes(&bytes).or_else(|| {
            warn!(path = %path.display(), "CA bundle file is not a valid certificate, using platform trust");
            None
        }),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read CA bundle file, using platform trust");
            None
        }
    }
}

/// Parse an inline certificate value.
///
/// PEM header present → literal PEM text; otherwise the value is treated
/// as base64-encoded certificate bytes (which may themselves be PEM or DER).
fn parse_inline_cert(cert: &str) -> Option<Certificate> {
    let trimmed = cert.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains(PEM_MARKER) {
        return match Certificate::from_pem(trimmed.as_bytes()) {
            Ok(cert) => Some(cert),
            Err(e) => {
                warn!(error = %e, "inline CA certificate is not valid PEM, using platform trust");
                None
            }
        };
    }
    match BASE64.decode(trimmed) {
        Ok(bytes) => parse_cert_bytes(&bytes).or_else(|| {
            warn!("decoded inline CA certificate is not a valid certificate, using platform trust");
            None
        }),
        Err(e) => {
            warn!(error = %e, "inline CA certificate is neither PEM nor base64, using platform trust");
            None
        }
    }
}

/// Parse raw certificate bytes, accepting PEM first and DER as fallback.
fn parse_cert_bytes(bytes: &[u8]) -> Option<Certificate> {
    Certificate::from_pem(bytes)
        .or_else(|_| Certificate::from_der(bytes))
        .ok()
}
