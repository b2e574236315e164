//! `Accept` header parsing
//!
//! Only what the failure gate needs: media ranges with their quality
//! values, and a wildcard-aware membership test. A missing or blank
//! header accepts everything.

use axum::http::header::ACCEPT;
use axum::http::HeaderMap;

#[derive(Debug, Clone, PartialEq)]
struct MediaRange {
    kind: String,
    subtype: String,
    quality: f32,
}

impl MediaRange {
    fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(';');
        let media = parts.next()?.trim().to_ascii_lowercase();
        let (kind, subtype) = match media.as_str() {
            "*" => ("*".to_string(), "*".to_string()),
            _ => {
                let (kind, subtype) = media.split_once('/')?;
                (kind.trim().to_string(), subtype.trim().to_string())
            }
        };
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }

        let mut quality = 1.0;
        for param in parts {
            if let Some((name, value)) = param.split_once('=') {
                if name.trim().eq_ignore_ascii_case("q") {
                    quality = value.trim().parse::<f32>().ok()?;
                }
            }
        }

        Some(Self {
            kind,
            subtype,
            quality,
        })
    }

    fn covers(&self, kind: &str, subtype: &str) -> bool {
        self.quality > 0.0
            && (self.kind == "*" || self.kind == kind)
            && (self.subtype == "*" || self.subtype == subtype)
    }
}

/// Response formats a client declared it accepts
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedFormats {
    /// `None` when the client placed no restriction
    ranges: Option<Vec<MediaRange>>,
}

impl AcceptedFormats {
    /// A client with no `Accept` header
    pub fn any() -> Self {
        Self { ranges: None }
    }

    pub fn parse(header: &str) -> Self {
        if header.trim().is_empty() {
            return Self::any();
        }
        let ranges = header.split(',').filter_map(MediaRange::parse).collect();
        Self {
            ranges: Some(ranges),
        }
    }

    /// Combine every `Accept` header of a request
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let values: Vec<&str> = headers
            .get_all(ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect();

        if values.is_empty() {
            return Self::any();
        }
        Self::parse(&values.join(","))
    }

    /// Whether `mime` (`type/subtype`) is acceptable
    pub fn accepts(&self, mime: &str) -> bool {
        let Some(ranges) = &self.ranges else {
            return true;
        };
        let (kind, subtype) = mime.split_once('/').unwrap_or((mime, "*"));
        ranges.iter().any(|range| range.covers(kind, subtype))
    }

    pub fn accepts_xml(&self) -> bool {
        self.accepts("application/xml")
    }
}

impl Default for AcceptedFormats {
    fn default() -> Self {
        Self::any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_missing_header_accepts_everything() {
        let formats = AcceptedFormats::from_headers(&HeaderMap::new());
        assert!(formats.accepts_xml());
        assert!(formats.accepts("application/json"));
        assert_eq!(AcceptedFormats::parse("  "), AcceptedFormats::any());
    }

    #[test]
    fn test_json_only_rejects_xml() {
        let formats = AcceptedFormats::parse("application/json");
        assert!(formats.accepts("application/json"));
        assert!(!formats.accepts_xml());
    }

    #[test]
    fn test_wildcards() {
        assert!(AcceptedFormats::parse("*/*").accepts_xml());
        assert!(AcceptedFormats::parse("*").accepts_xml());
        assert!(AcceptedFormats::parse("application/*").accepts_xml());
        assert!(!AcceptedFormats::parse("text/*").accepts_xml());
    }

    #[test]
    fn test_zero_quality_excludes() {
        let formats = AcceptedFormats::parse("application/json, application/xml;q=0");
        assert!(!formats.accepts_xml());

        let formats = AcceptedFormats::parse("application/json;q=0.9, application/xml;q=0.1");
        assert!(formats.accepts_xml());
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let formats = AcceptedFormats::parse(" Application/XML ; Q=0.5 ");
        assert!(formats.accepts_xml());
    }

    #[test]
    fn test_malformed_ranges_are_skipped() {
        let formats = AcceptedFormats::parse("garbage, application/xml;q=abc");
        assert!(!formats.accepts_xml());
        assert!(!formats.accepts("application/json"));
    }

    #[test]
    fn test_multiple_headers_are_combined() {
        let mut headers = HeaderMap::new();
        headers.append(ACCEPT, HeaderValue::from_static("application/json"));
        headers.append(ACCEPT, HeaderValue::from_static("application/xml"));
        assert!(AcceptedFormats::from_headers(&headers).accepts_xml());
    }
}
