//! Resource identifier handling.
//!
//! The authority assigns identifiers of the form `dns://<domain>`.
//! Controller versions 0.3.1 and earlier stored the bare domain instead,
//! which is incorrect; those identifiers are still accepted and are
//! normalized at the point of use. Stored state is never rewritten to the
//! new format.

use crate::error::{CoreError, CoreResult};

/// Scheme prefix of a well-formed resource identifier.
pub const SCHEME_PREFIX: &str = "dns://";

/// Prepend the scheme to a legacy bare-domain identifier.
///
/// Scheme-qualified identifiers pass through unchanged.
#[must_use]
pub fn normalize(id: &str) -> String {
    if id.starts_with(SCHEME_PREFIX) {
        id.to_string()
    } else {
        format!("{SCHEME_PREFIX}{id}")
    }
}

/// Recover the domain from an identifier, with or without the scheme.
#[must_use]
pub fn domain_of(id: &str) -> &str {
    id.strip_prefix(SCHEME_PREFIX).unwrap_or(id)
}

/// Strictly percent-decode an identifier returned by the authority.
///
/// The authority percent-encodes ids for some domains (internationalized
/// names). A malformed escape is terminal: the same bytes would come back
/// on every retry.
pub fn decode(raw: &str) -> CoreResult<String> {
    // `urlencoding` passes malformed escapes through untouched, so reject
    // them up front.
    validate_escapes(raw)?;
    match urlencoding::decode(raw) {
        Ok(decoded) => Ok(decoded.into_owned()),
        Err(e) => Err(CoreError::IdDecodeFailed {
            raw: raw.to_string(),
            detail: e.to_string(),
        }),
    }
}

/// Every `%` must be followed by two hex digits.
fn validate_escapes(raw: &str) -> CoreResult<()> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(CoreError::IdDecodeFailed {
                    raw: raw.to_string(),
                    detail: format!("invalid percent escape at byte {i}"),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prepends_scheme_to_bare_domain() {
        assert_eq!(normalize("example.com"), "dns://example.com");
    }

    #[test]
    fn normalize_keeps_qualified_id_unchanged() {
        assert_eq!(normalize("dns://example.com"), "dns://example.com");
    }

    #[test]
    fn domain_of_strips_scheme() {
        assert_eq!(domain_of("dns://example.com"), "example.com");
    }

    #[test]
    fn domain_of_accepts_bare_domain() {
        assert_eq!(domain_of("example.com"), "example.com");
    }

    #[test]
    fn decode_unescapes_encoded_id() {
        let decoded = decode("dns%3A%2F%2Fexample.com").unwrap();
        assert_eq!(decoded, "dns://example.com");
    }

    #[test]
    fn decode_passes_plain_id_through() {
        let decoded = decode("dns://example.com").unwrap();
        assert_eq!(decoded, "dns://example.com");
    }

    #[test]
    fn decode_handles_idn_escapes() {
        // dns://bücher.example percent-encoded (UTF-8 ü = C3 BC)
        let decoded = decode("dns%3A%2F%2Fb%C3%BCcher.example").unwrap();
        assert_eq!(decoded, "dns://bücher.example");
    }

    #[test]
    fn decode_rejects_non_hex_escape() {
        let err = decode("dns://%zz").unwrap_err();
        assert!(matches!(err, CoreError::IdDecodeFailed { ref raw, .. } if raw == "dns://%zz"));
    }

    #[test]
    fn decode_rejects_truncated_escape() {
        let err = decode("dns://example.com%2").unwrap_err();
        assert!(matches!(err, CoreError::IdDecodeFailed { .. }));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        // %FF alone is not valid UTF-8.
        let err = decode("dns://%FF").unwrap_err();
        assert!(matches!(err, CoreError::IdDecodeFailed { .. }));
    }
}
