//! Canonical format patterns shared by encoders and decoders
//!
//! Every encoder emits exactly one canonical rendering; decoders accept
//! the canonical form plus the RFC 3339 / ISO-8601 variants an external
//! standard formatter may produce (variable fraction digits, missing
//! fraction).

use std::fmt::{Display, Write};

use chronopack_core::{CodecError, CodecResult};

/// Canonical instant rendering, always UTC
pub const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Canonical calendar date rendering
pub const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical local date-time rendering, no zone suffix
pub const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Offset suffix for zone-aware renderings (`+HH:MM`; zero offset emits `Z`)
pub const OFFSET_SUFFIX_FORMAT: &str = "%:z";

/// Canonical offset date-time rendering, for diagnostics
pub const OFFSET_DATE_TIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Canonical zoned date-time rendering, for diagnostics
pub const ZONED_DATE_TIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z[zone-id]";

/// Lenient local date-time parse pattern (fraction optional, any length)
pub const LOCAL_DATE_TIME_PARSE: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Accepted zone identifier forms, for diagnostics
pub const ZONE_ID_PATTERN: &str = "IANA zone id or +HH:MM offset";

/// Render a delayed chrono formatter into an owned string.
///
/// Chrono reports formatting failures for degenerate values through
/// `fmt::Error`; capture that instead of panicking inside `format!`.
pub(crate) fn render(kind: &'static str, formatted: impl Display) -> CodecResult<String> {
    let mut out = String::new();
    write!(out, "{formatted}").map_err(|_| CodecError::Format {
        kind,
        reason: "value not representable in canonical pattern".into(),
    })?;
    Ok(out)
}

pub(crate) fn parse_error(text: &str, kind: &'static str, pattern: &'static str) -> CodecError {
    CodecError::Parse {
        text: text.to_owned(),
        kind,
        pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[test]
    fn test_render_instant_pattern() {
        let instant = DateTime::<Utc>::from_timestamp_millis(1474988621).unwrap();
        let text = render("Instant", instant.format(INSTANT_FORMAT)).unwrap();
        assert_eq!(text, "1970-01-18T01:43:08.621Z");
    }

    #[test]
    fn test_render_pads_fraction_to_millis() {
        let instant = DateTime::<Utc>::from_timestamp_millis(1_000).unwrap();
        let text = render("Instant", instant.format(INSTANT_FORMAT)).unwrap();
        assert_eq!(text, "1970-01-01T00:00:01.000Z");
    }
}
