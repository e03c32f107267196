//! Request signing — canonical message construction and HMAC-SHA512.
//!
//! The server verifies a base64-encoded HMAC-SHA512 over a newline-joined
//! canonical message. For POST requests the signed bytes must be the exact
//! bytes transmitted as the body; the HTTP layer serializes each body once
//! and passes the same string to both [`sign`] and the transport.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha512 = Hmac<Sha512>;

/// Build the canonical message for a request.
///
/// Layout: `path` `\n` `timestamp` `\n` `body`. With no body the message
/// ends right after the second newline — `"{path}\n{ts}\n"`, not
/// `"{path}\n{ts}\n\n"`.
pub fn canonical_message(path: &str, timestamp_ms: &str, body: Option<&str>) -> String {
    format!("{}\n{}\n{}", path, timestamp_ms, body.unwrap_or(""))
}

/// Sign a request: HMAC-SHA512 over the canonical message, base64 digest.
///
/// `secret` is the raw (post-base64-decode) key. Signing never fails —
/// HMAC accepts keys of any length and an empty path still signs; input
/// validation is the caller's concern.
pub fn sign(secret: &[u8], path: &str, timestamp_ms: &str, body: Option<&str>) -> String {
    let mut mac = HmacSha512::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(canonical_message(path, timestamp_ms, body).as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Current wall-clock time as decimal milliseconds since the Unix epoch.
///
/// Sampled independently per signed request; the server enforces an
/// undocumented freshness window, so signatures are never cached or reused.
pub fn timestamp_ms() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System clock is before UNIX epoch")
        .as_millis()
        .to_string()
}
