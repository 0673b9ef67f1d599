//! Decoders: one per temporal kind
//!
//! Two input forms are accepted, in this precedence:
//! 1. a string scalar, parsed with the kind's canonical pattern (plus the
//!    RFC 3339 variants an external standard formatter produces);
//! 2. an int scalar, the legacy signed epoch-millisecond encoding from an
//!    earlier format generation, projected onto the target kind through
//!    the explicitly configured legacy zone.
//!
//! The leniency stops there: doubles, bools and nulls are type mismatches,
//! never coerced.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use chronopack_core::{CodecError, CodecResult, Scalar};
use tracing::trace;

use crate::format::{
    parse_error, INSTANT_FORMAT, LOCAL_DATE_FORMAT, LOCAL_DATE_TIME_PARSE,
    OFFSET_DATE_TIME_PATTERN, ZONED_DATE_TIME_PATTERN, ZONE_ID_PATTERN,
};
use crate::zone::{ZoneId, ZonedDateTime};

/// Decode an absolute instant
pub fn decode_instant(slice: &Scalar) -> CodecResult<DateTime<Utc>> {
    if let Some(text) = slice.as_str() {
        return DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| parse_error(text, "Instant", INSTANT_FORMAT));
    }
    if let Some(millis) = slice.as_i64() {
        return legacy_instant(millis, "Instant");
    }
    Err(mismatch(slice))
}

/// Decode a calendar date
pub fn decode_local_date(slice: &Scalar, legacy_zone: ZoneId) -> CodecResult<NaiveDate> {
    if let Some(text) = slice.as_str() {
        return NaiveDate::parse_from_str(text, LOCAL_DATE_FORMAT)
            .map_err(|_| parse_error(text, "LocalDate", LOCAL_DATE_FORMAT));
    }
    if let Some(millis) = slice.as_i64() {
        let instant = legacy_instant(millis, "LocalDate")?;
        return Ok(legacy_zone.naive_local_at(instant).date());
    }
    Err(mismatch(slice))
}

/// Decode a local date-time
pub fn decode_local_date_time(slice: &Scalar, legacy_zone: ZoneId) -> CodecResult<NaiveDateTime> {
    if let Some(text) = slice.as_str() {
        return NaiveDateTime::parse_from_str(text, LOCAL_DATE_TIME_PARSE)
            .map_err(|_| parse_error(text, "LocalDateTime", LOCAL_DATE_TIME_PARSE));
    }
    if let Some(millis) = slice.as_i64() {
        let instant = legacy_instant(millis, "LocalDateTime")?;
        return Ok(legacy_zone.naive_local_at(instant));
    }
    Err(mismatch(slice))
}

/// Decode a date-time with fixed offset
pub fn decode_offset_date_time(
    slice: &Scalar,
    legacy_zone: ZoneId,
) -> CodecResult<DateTime<FixedOffset>> {
    if let Some(text) = slice.as_str() {
        return DateTime::parse_from_rfc3339(text)
            .map_err(|_| parse_error(text, "OffsetDateTime", OFFSET_DATE_TIME_PATTERN));
    }
    if let Some(millis) = slice.as_i64() {
        // Legacy values take the offset the configured zone has at that
        // instant, not a caller-fixed one.
        let instant = legacy_instant(millis, "OffsetDateTime")?;
        return Ok(instant.with_timezone(&legacy_zone.offset_at(instant)));
    }
    Err(mismatch(slice))
}

/// Decode a zone-aware date-time
///
/// Accepts both the bracketed canonical form and a bare offset form (an
/// external ISO formatter omits the bracket suffix when the zone is itself
/// an offset); the bare form yields a fixed-offset zone identity.
pub fn decode_zoned_date_time(slice: &Scalar, legacy_zone: ZoneId) -> CodecResult<ZonedDateTime> {
    if let Some(text) = slice.as_str() {
        let (datetime_part, zone_part) = match text.find('[') {
            Some(open) if text.ends_with(']') => {
                (&text[..open], Some(&text[open + 1..text.len() - 1]))
            }
            _ => (text, None),
        };
        let datetime = DateTime::parse_from_rfc3339(datetime_part)
            .map_err(|_| parse_error(text, "ZonedDateTime", ZONED_DATE_TIME_PATTERN))?;
        let zone = match zone_part {
            Some(id) => id.parse::<ZoneId>()?,
            None => ZoneId::Fixed(*datetime.offset()),
        };
        return Ok(ZonedDateTime::from_instant(datetime.with_timezone(&Utc), zone));
    }
    if let Some(millis) = slice.as_i64() {
        let instant = legacy_instant(millis, "ZonedDateTime")?;
        return Ok(ZonedDateTime::from_instant(instant, legacy_zone));
    }
    Err(mismatch(slice))
}

/// Decode a standalone zone identifier
///
/// Zone identifiers have no epoch representation, so the legacy numeric
/// form is a type mismatch here, not a fallback.
pub fn decode_zone_id(slice: &Scalar) -> CodecResult<ZoneId> {
    match slice.as_str() {
        Some(text) => text
            .parse::<ZoneId>()
            .map_err(|_| parse_error(text, "ZoneId", ZONE_ID_PATTERN)),
        None => Err(CodecError::TypeMismatch {
            expected: "string",
            actual: slice.type_name(),
        }),
    }
}

fn legacy_instant(millis: i64, kind: &'static str) -> CodecResult<DateTime<Utc>> {
    trace!(millis, kind, "decoding legacy epoch-millisecond scalar");
    DateTime::from_timestamp_millis(millis).ok_or(CodecError::Range { millis })
}

fn mismatch(slice: &Scalar) -> CodecError {
    CodecError::TypeMismatch {
        expected: "string or int",
        actual: slice.type_name(),
    }
}
