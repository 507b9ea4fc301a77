//! Rate-limit header parsing.

use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Quota snapshot from the gateway's rate-limit headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests allowed per window.
    pub limit: u64,
    /// Requests left in the current window.
    pub remaining: u64,
    /// Unix timestamp at which the window resets.
    pub reset: u64,
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

impl RateLimitInfo {
    /// Parses `x-ratelimit-*` headers. `None` unless all three are present
    /// and numeric.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        Some(Self {
            limit: header_u64(headers, "x-ratelimit-limit")?,
            remaining: header_u64(headers, "x-ratelimit-remaining")?,
            reset: header_u64(headers, "x-ratelimit-reset")?,
        })
    }
}

/// Seconds to wait, from a `retry-after` header (numeric form only).
pub(crate) fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn parses_complete_header_set() {
        let h = headers(&[
            ("x-ratelimit-limit", "100"),
            ("x-ratelimit-remaining", "42"),
            ("x-ratelimit-reset", "1760000000"),
        ]);
        assert_eq!(
            RateLimitInfo::from_headers(&h),
            Some(RateLimitInfo {
                limit: 100,
                remaining: 42,
                reset: 1_760_000_000,
            })
        );
    }

    #[test]
    fn incomplete_or_garbage_headers_yield_none() {
        let h = headers(&[("x-ratelimit-limit", "100")]);
        assert_eq!(RateLimitInfo::from_headers(&h), None);
        let h = headers(&[
            ("x-ratelimit-limit", "100"),
            ("x-ratelimit-remaining", "soon"),
            ("x-ratelimit-reset", "1760000000"),
        ]);
        assert_eq!(RateLimitInfo::from_headers(&h), None);
    }

    #[test]
    fn retry_after_numeric_only() {
        let h = headers(&[("retry-after", "30")]);
        assert_eq!(retry_after_secs(&h), Some(30));
        let h = headers(&[("retry-after", "Wed, 21 Oct 2025 07:28:00 GMT")]);
        assert_eq!(retry_after_secs(&h), None);
        assert_eq!(retry_after_secs(&HeaderMap::new()), None);
    }
}
