//! Zone identity types
//!
//! A zone identifier is either a named IANA region (`Europe/Berlin`) or a
//! fixed offset pseudo-id (`+01:00`, `Z`). The two are kept distinct from
//! plain offset date-times: an offset-only value has no region identity to
//! round-trip, a named zone does.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use chrono_tz::Tz;
use chronopack_core::{CodecError, CodecResult};

use crate::format::{parse_error, ZONE_ID_PATTERN};

/// A time-zone identity: named region or fixed offset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneId {
    /// IANA region, e.g. `Europe/Berlin`
    Named(Tz),
    /// Fixed offset pseudo-zone, e.g. `+01:00`; zero renders as `Z`
    Fixed(FixedOffset),
}

impl ZoneId {
    /// The UTC region zone
    pub const UTC: ZoneId = ZoneId::Named(Tz::UTC);

    /// Offset this zone is at for the given instant
    ///
    /// Named zones consult the tz database (DST transitions apply); fixed
    /// offsets are constant.
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            ZoneId::Named(tz) => instant.with_timezone(tz).offset().fix(),
            ZoneId::Fixed(offset) => *offset,
        }
    }

    /// Wall-clock date-time this zone observes at the given instant
    pub fn naive_local_at(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.offset_at(instant)).naive_local()
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::Named(tz) => f.write_str(tz.name()),
            ZoneId::Fixed(offset) if offset.local_minus_utc() == 0 => f.write_str("Z"),
            ZoneId::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for ZoneId {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        if s == "Z" {
            return Ok(ZoneId::Fixed(Utc.fix()));
        }
        if let Ok(tz) = s.parse::<Tz>() {
            return Ok(ZoneId::Named(tz));
        }
        if let Ok(offset) = s.parse::<FixedOffset>() {
            return Ok(ZoneId::Fixed(offset));
        }
        Err(parse_error(s, "ZoneId", ZONE_ID_PATTERN))
    }
}

/// A date-time carrying both its resolved offset and its zone identity
///
/// The offset is always the one the zone observes at the carried instant;
/// constructors re-resolve it so a value can never hold an offset its zone
/// does not have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZonedDateTime {
    datetime: DateTime<FixedOffset>,
    zone: ZoneId,
}

impl ZonedDateTime {
    /// Place an absolute instant into a zone
    pub fn from_instant(instant: DateTime<Utc>, zone: ZoneId) -> Self {
        let offset = zone.offset_at(instant);
        ZonedDateTime {
            datetime: instant.with_timezone(&offset),
            zone,
        }
    }

    /// The date-time in the zone's resolved offset
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.datetime
    }

    /// The zone identity
    pub fn zone(&self) -> ZoneId {
        self.zone
    }

    /// The absolute instant
    pub fn instant(&self) -> DateTime<Utc> {
        self.datetime.with_timezone(&Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn test_zone_id_display_roundtrip() {
        let berlin: ZoneId = "Europe/Berlin".parse().unwrap();
        assert_eq!(berlin, ZoneId::Named(Tz::Europe__Berlin));
        assert_eq!(berlin.to_string(), "Europe/Berlin");
        assert_eq!(berlin.to_string().parse::<ZoneId>().unwrap(), berlin);

        let plus_one: ZoneId = "+01:00".parse().unwrap();
        assert_eq!(plus_one.to_string(), "+01:00");

        let zulu: ZoneId = "Z".parse().unwrap();
        assert_eq!(zulu, ZoneId::Fixed(Utc.fix()));
        assert_eq!(zulu.to_string(), "Z");
    }

    #[test]
    fn test_zone_id_rejects_garbage() {
        let err = "not-a-zone!".parse::<ZoneId>().unwrap_err();
        assert!(matches!(err, CodecError::Parse { .. }));
    }

    #[test]
    fn test_named_zone_observes_dst() {
        let berlin = ZoneId::Named(Tz::Europe__Berlin);
        // 2016-01-15T12:00:00Z is CET (+01:00)
        let winter = instant(1_452_859_200_000);
        assert_eq!(berlin.offset_at(winter).local_minus_utc(), 3600);
        // 2016-07-15T12:00:00Z is CEST (+02:00)
        let summer = instant(1_468_584_000_000);
        assert_eq!(berlin.offset_at(summer).local_minus_utc(), 7200);
    }

    #[test]
    fn test_zoned_date_time_resolves_offset_from_zone() {
        let berlin = ZoneId::Named(Tz::Europe__Berlin);
        let zdt = ZonedDateTime::from_instant(instant(1_452_859_200_000), berlin);
        assert_eq!(zdt.datetime().offset().local_minus_utc(), 3600);
        assert_eq!(zdt.zone(), berlin);
        assert_eq!(zdt.instant(), instant(1_452_859_200_000));
    }
}
