//! Utility functions.

use tracing::{error, info};

/// Parse a path segment as an integer the lenient way.
///
/// Leading whitespace is skipped and an optional sign is accepted. A `0x` or
/// `0X` prefix switches to hexadecimal. Then the leading run of digits in that
/// radix is used and anything after it is ignored. Returns `None` when there
/// are no digits or the value overflows `i64`.
///
/// ```
/// use users_service::utils::parse_id;
///
/// assert_eq!(parse_id("3"), Some(3));
/// assert_eq!(parse_id("3abc"), Some(3));
/// assert_eq!(parse_id("0x2"), Some(2));
/// assert_eq!(parse_id("abc"), None);
/// ```
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let value = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -value } else { value })
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_plain_numbers() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("007"), Some(7));
    }

    #[test]
    fn parse_id_takes_leading_digits() {
        assert_eq!(parse_id("3abc"), Some(3));
        assert_eq!(parse_id("1.5"), Some(1));
        assert_eq!(parse_id("  7"), Some(7));
    }

    #[test]
    fn parse_id_signs() {
        assert_eq!(parse_id("-1"), Some(-1));
        assert_eq!(parse_id("+2"), Some(2));
        assert_eq!(parse_id("-"), None);
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("a1"), None);
    }

    #[test]
    fn parse_id_hex_prefix() {
        assert_eq!(parse_id("0x2"), Some(2));
        assert_eq!(parse_id("0X1f"), Some(31));
        assert_eq!(parse_id("-0x2"), Some(-2));
        assert_eq!(parse_id("0x2g"), Some(2));
        assert_eq!(parse_id("0x"), None);
        assert_eq!(parse_id("0xg"), None);
    }

    #[test]
    fn parse_id_overflow_is_none() {
        assert_eq!(parse_id("99999999999999999999"), None);
    }
}
