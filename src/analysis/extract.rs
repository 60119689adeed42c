//! Single-line extraction for nginx `ui_short` access logs.
//!
//! Layout, one request per line:
//!
//! ```text
//! $remote_addr $remote_user $http_x_real_ip [$time_local] "$request"
//! $status $body_bytes_sent "$http_referer" "$http_user_agent"
//! "$http_x_forwarded_for" "$http_X_REQUEST_ID" "$http_X_RB_USER"
//! $request_time
//! ```
//!
//! Only two fields are read: the URL of the quoted `$request` and the trailing
//! `$request_time` (seconds). The position of `$request_time` as the last token
//! is part of the layout contract; it is not detected.
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// `[time_local] "METHOD URL PROTOCOL" ... request_time`
///
/// `METHOD` may be empty (nginx logs `"-"`-style requests without one).
const REQUEST_LINE_PATTERN: &str =
    r#"\[[^\]]+\] "[A-Z-]* (?P<url>[^\s"]+) [^"]*"\s(?:.*\s)?(?P<duration>\S+)$"#;

#[expect(
    clippy::expect_used,
    reason = "Pattern is a literal exercised by the extractor tests"
)]
static REQUEST_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(REQUEST_LINE_PATTERN).expect("request line pattern compiles"));

/// One successfully parsed request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogRecord<'line> {
    pub endpoint: &'line str,
    pub response_time: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("line does not match the access-log layout")]
    Layout,
    #[error("request time '{token}' is not a non-negative number")]
    Duration { token: String },
}

/// Extracts the endpoint and request time from one raw log line.
///
/// # Errors
///
/// Returns [`ParseFailure::Layout`] when the bracket/quote structure is
/// missing and [`ParseFailure::Duration`] when the trailing token is not a
/// plain decimal number.
pub fn extract(line: &str) -> Result<LogRecord<'_>, ParseFailure> {
    let line = line.trim_end_matches(['\n', '\r']);
    let captures = REQUEST_LINE.captures(line).ok_or(ParseFailure::Layout)?;
    let endpoint = captures
        .name("url")
        .map(|value| value.as_str())
        .ok_or(ParseFailure::Layout)?;
    let token = captures
        .name("duration")
        .map(|value| value.as_str())
        .ok_or(ParseFailure::Layout)?;
    let response_time = parse_request_time(token).ok_or_else(|| ParseFailure::Duration {
        token: token.to_owned(),
    })?;
    Ok(LogRecord {
        endpoint,
        response_time,
    })
}

fn parse_request_time(token: &str) -> Option<f64> {
    if !token.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.') {
        return None;
    }
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] "GET /api/v2/banner/25019354 HTTP/1.1" 200 927 "-" "Lynx/2.8.8dev.9 libwww-FM/2.14 SSL-MM/1.4.1 GNUTLS/2.10.5" "-" "1498697422-2190034393-4708-9752759" "dc7161be3" 0.390
"#;

    fn expect_record(line: &str, endpoint: &str, time: f64) -> Result<(), String> {
        let record = extract(line).map_err(|err| format!("extract failed: {}", err))?;
        if record.endpoint != endpoint {
            return Err(format!("Unexpected endpoint: {}", record.endpoint));
        }
        if (record.response_time - time).abs() > 1e-9 {
            return Err(format!("Unexpected time: {}", record.response_time));
        }
        Ok(())
    }

    #[test]
    fn extract_reads_url_and_trailing_time() -> Result<(), String> {
        expect_record(SAMPLE, "/api/v2/banner/25019354", 0.390)
    }

    #[test]
    fn extract_accepts_crlf_and_minimal_fields() -> Result<(), String> {
        expect_record(
            "[01/Jul/2017:00:00:01 +0300] \"POST /api/a?x=1 HTTP/1.0\" 0.125\r\n",
            "/api/a?x=1",
            0.125,
        )
    }

    #[test]
    fn extract_uses_last_token_as_time() -> Result<(), String> {
        expect_record(
            r#"::1 - - [01/Jul/2017:00:00:01 +0300] "GET /x HTTP/1.1" 200 12 "-" "agent 1.5" 3"#,
            "/x",
            3.0,
        )
    }

    #[test]
    fn extract_rejects_missing_structure() -> Result<(), String> {
        for line in [
            "",
            "garbage",
            "1.1.1.1 - - 29/Jun/2017 \"GET /a HTTP/1.1\" 200 0.1",
            "1.1.1.1 - - [29/Jun/2017] GET /a HTTP/1.1 200 0.1",
            "1.1.1.1 - - [29/Jun/2017] \"GET /a HTTP/1.1\"",
        ] {
            if extract(line) != Err(ParseFailure::Layout) {
                return Err(format!("Expected layout failure for {:?}", line));
            }
        }
        Ok(())
    }

    #[test]
    fn extract_rejects_non_numeric_time() -> Result<(), String> {
        for token in ["-", "NaN", "inf", "1e3", "-0.5", "0.1.2", "."] {
            let line = format!("[29/Jun/2017] \"GET /a HTTP/1.1\" 200 {}", token);
            match extract(&line) {
                Err(ParseFailure::Duration { token: seen }) if seen == token => {}
                other => return Err(format!("Unexpected result for {}: {:?}", token, other)),
            }
        }
        Ok(())
    }
}
