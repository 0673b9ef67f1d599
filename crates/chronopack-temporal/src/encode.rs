//! Encoders: one per temporal kind
//!
//! Each encoder writes exactly one string scalar, the canonical rendering
//! of its kind. Encoding never consults ambient host configuration; the
//! only zone information used is the one the value itself carries.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use chronopack_core::{CodecResult, ScalarBuilder};

use crate::format::{
    render, INSTANT_FORMAT, LOCAL_DATE_FORMAT, LOCAL_DATE_TIME_FORMAT, OFFSET_SUFFIX_FORMAT,
};
use crate::zone::{ZoneId, ZonedDateTime};

/// Encode an absolute instant, always rendered in UTC
pub fn encode_instant(value: DateTime<Utc>, out: &mut ScalarBuilder) -> CodecResult<()> {
    let text = render("Instant", value.format(INSTANT_FORMAT))?;
    out.add_string(text);
    Ok(())
}

/// Encode a calendar date
pub fn encode_local_date(value: NaiveDate, out: &mut ScalarBuilder) -> CodecResult<()> {
    let text = render("LocalDate", value.format(LOCAL_DATE_FORMAT))?;
    out.add_string(text);
    Ok(())
}

/// Encode a local date-time, no zone suffix
pub fn encode_local_date_time(value: NaiveDateTime, out: &mut ScalarBuilder) -> CodecResult<()> {
    let text = render("LocalDateTime", value.format(LOCAL_DATE_TIME_FORMAT))?;
    out.add_string(text);
    Ok(())
}

/// Encode a date-time with the offset the value carries
pub fn encode_offset_date_time(
    value: DateTime<FixedOffset>,
    out: &mut ScalarBuilder,
) -> CodecResult<()> {
    out.add_string(offset_date_time_text(value)?);
    Ok(())
}

/// Encode a zone-aware date-time: offset form plus `[zone-id]` suffix
pub fn encode_zoned_date_time(value: &ZonedDateTime, out: &mut ScalarBuilder) -> CodecResult<()> {
    let mut text = offset_date_time_text(value.datetime())?;
    text.push('[');
    text.push_str(&value.zone().to_string());
    text.push(']');
    out.add_string(text);
    Ok(())
}

/// Encode a standalone zone identifier verbatim
pub fn encode_zone_id(value: ZoneId, out: &mut ScalarBuilder) -> CodecResult<()> {
    out.add_string(value.to_string());
    Ok(())
}

/// Local date-time rendering followed by the value's own offset suffix.
/// Zero offset renders as `Z`, matching the canonical pattern.
fn offset_date_time_text(value: DateTime<FixedOffset>) -> CodecResult<String> {
    let mut text = render("OffsetDateTime", value.format(LOCAL_DATE_TIME_FORMAT))?;
    if value.offset().local_minus_utc() == 0 {
        text.push('Z');
    } else {
        let suffix = render("OffsetDateTime", value.format(OFFSET_SUFFIX_FORMAT))?;
        text.push_str(&suffix);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Tz;
    use chronopack_core::Scalar;

    fn written(builder: ScalarBuilder) -> String {
        match builder.into_values().pop() {
            Some(Scalar::String(s)) => s,
            other => panic!("expected one string scalar, got {other:?}"),
        }
    }

    #[test]
    fn test_instant_renders_utc() {
        let instant = DateTime::from_timestamp_millis(1474988621).unwrap();
        let mut builder = ScalarBuilder::new();
        encode_instant(instant, &mut builder).unwrap();
        assert_eq!(written(builder), "1970-01-18T01:43:08.621Z");
    }

    #[test]
    fn test_local_date() {
        let date = NaiveDate::from_ymd_opt(2016, 9, 27).unwrap();
        let mut builder = ScalarBuilder::new();
        encode_local_date(date, &mut builder).unwrap();
        assert_eq!(written(builder), "2016-09-27");
    }

    #[test]
    fn test_local_date_time_has_no_zone_suffix() {
        let dt = NaiveDate::from_ymd_opt(2016, 9, 27)
            .unwrap()
            .and_hms_milli_opt(10, 13, 40, 80)
            .unwrap();
        let mut builder = ScalarBuilder::new();
        encode_local_date_time(dt, &mut builder).unwrap();
        assert_eq!(written(builder), "2016-09-27T10:13:40.080");
    }

    #[test]
    fn test_offset_date_time_keeps_value_offset() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let dt = offset.with_ymd_and_hms(2016, 9, 27, 10, 13, 40).unwrap();
        let mut builder = ScalarBuilder::new();
        encode_offset_date_time(dt, &mut builder).unwrap();
        assert_eq!(written(builder), "2016-09-27T10:13:40.000+01:00");
    }

    #[test]
    fn test_offset_date_time_zero_offset_renders_z() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let dt = offset.with_ymd_and_hms(2016, 9, 27, 10, 13, 40).unwrap();
        let mut builder = ScalarBuilder::new();
        encode_offset_date_time(dt, &mut builder).unwrap();
        assert_eq!(written(builder), "2016-09-27T10:13:40.000Z");
    }

    #[test]
    fn test_zoned_date_time_appends_zone_brackets() {
        let instant = DateTime::from_timestamp_millis(1_452_859_200_000).unwrap();
        let zdt = ZonedDateTime::from_instant(instant, ZoneId::Named(Tz::Europe__Berlin));
        let mut builder = ScalarBuilder::new();
        encode_zoned_date_time(&zdt, &mut builder).unwrap();
        assert_eq!(written(builder), "2016-01-15T13:00:00.000+01:00[Europe/Berlin]");
    }

    #[test]
    fn test_zone_id_verbatim() {
        let mut builder = ScalarBuilder::new();
        encode_zone_id(ZoneId::Named(Tz::Europe__Berlin), &mut builder).unwrap();
        assert_eq!(written(builder), "Europe/Berlin");
    }
}
