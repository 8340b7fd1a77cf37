//! Object key generation.
//!
//! Keys have the shape `<kind>/<epoch-millis>-<token>.<ext>`. The timestamp
//! plus random token makes collisions between two uploads vanishingly
//! unlikely; the service never deduplicates.

use std::path::Path;

use chrono::Utc;

use crate::models::MediaKind;

const TOKEN_LEN: usize = 5;
const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Maximum extension length kept from a client filename.
const MAX_EXTENSION_LEN: usize = 16;

/// Generate the object key for an upload.
///
/// The extension comes from the client filename when present, otherwise from
/// the configured per-kind default.
pub fn object_key(
    kind: MediaKind,
    original_filename: Option<&str>,
    default_extension: &str,
) -> String {
    let extension = original_filename
        .and_then(extension_of)
        .unwrap_or_else(|| default_extension.to_lowercase());

    format!(
        "{}/{}-{}.{}",
        kind.key_prefix(),
        Utc::now().timestamp_millis(),
        random_token(TOKEN_LEN),
        extension
    )
}

/// Generate a random lowercase-alphanumeric token.
pub fn random_token(len: usize) -> String {
    use rand::Rng;

    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_ALPHABET.len());
            TOKEN_ALPHABET[idx] as char
        })
        .collect()
}

/// Sanitized extension of a client filename.
///
/// Only the final component's extension is considered; the result is
/// lowercased and restricted to ASCII alphanumerics so nothing from the
/// client filename can alter the key path.
pub fn extension_of(filename: &str) -> Option<String> {
    let extension: String = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())?
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .take(MAX_EXTENSION_LEN)
        .collect();

    if extension.is_empty() {
        None
    } else {
        Some(extension)
    }
}
