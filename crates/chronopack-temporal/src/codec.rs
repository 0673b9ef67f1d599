//! Codec dispatch over the closed set of temporal kinds
//!
//! The generic mapping framework records a `TemporalKind` per field when
//! the schema is registered, then routes every encode/decode for that
//! field through one process-wide `TemporalCodec`. The codec is stateless
//! apart from its configured legacy zone, so a single instance serves
//! arbitrarily many concurrent calls.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use chronopack_core::{CodecResult, Scalar, ScalarBuilder};

use crate::decode;
use crate::encode;
use crate::zone::{ZoneId, ZonedDateTime};

/// The six temporal kinds a field can be registered as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    Instant,
    LocalDate,
    LocalDateTime,
    OffsetDateTime,
    ZonedDateTime,
    ZoneId,
}

impl TemporalKind {
    pub fn name(&self) -> &'static str {
        match self {
            TemporalKind::Instant => "Instant",
            TemporalKind::LocalDate => "LocalDate",
            TemporalKind::LocalDateTime => "LocalDateTime",
            TemporalKind::OffsetDateTime => "OffsetDateTime",
            TemporalKind::ZonedDateTime => "ZonedDateTime",
            TemporalKind::ZoneId => "ZoneId",
        }
    }
}

/// A temporal value tagged with its kind
#[derive(Clone, Debug, PartialEq)]
pub enum TemporalValue {
    Instant(DateTime<Utc>),
    LocalDate(NaiveDate),
    LocalDateTime(NaiveDateTime),
    OffsetDateTime(DateTime<FixedOffset>),
    ZonedDateTime(ZonedDateTime),
    ZoneId(ZoneId),
}

impl TemporalValue {
    pub fn kind(&self) -> TemporalKind {
        match self {
            TemporalValue::Instant(_) => TemporalKind::Instant,
            TemporalValue::LocalDate(_) => TemporalKind::LocalDate,
            TemporalValue::LocalDateTime(_) => TemporalKind::LocalDateTime,
            TemporalValue::OffsetDateTime(_) => TemporalKind::OffsetDateTime,
            TemporalValue::ZonedDateTime(_) => TemporalKind::ZonedDateTime,
            TemporalValue::ZoneId(_) => TemporalKind::ZoneId,
        }
    }
}

/// Stateless codec over all six temporal kinds
///
/// `legacy_zone` is the projection target for legacy epoch-millisecond
/// scalars. It is supplied once at construction instead of being read from
/// the host environment, so decoding behaves identically on hosts with
/// different zone configuration.
#[derive(Clone, Copy, Debug)]
pub struct TemporalCodec {
    legacy_zone: ZoneId,
}

impl TemporalCodec {
    pub fn new(legacy_zone: ZoneId) -> Self {
        TemporalCodec { legacy_zone }
    }

    pub fn legacy_zone(&self) -> ZoneId {
        self.legacy_zone
    }

    /// Write the canonical encoding of `value` as one string scalar
    pub fn encode(&self, value: &TemporalValue, out: &mut ScalarBuilder) -> CodecResult<()> {
        match value {
            TemporalValue::Instant(v) => encode::encode_instant(*v, out),
            TemporalValue::LocalDate(v) => encode::encode_local_date(*v, out),
            TemporalValue::LocalDateTime(v) => encode::encode_local_date_time(*v, out),
            TemporalValue::OffsetDateTime(v) => encode::encode_offset_date_time(*v, out),
            TemporalValue::ZonedDateTime(v) => encode::encode_zoned_date_time(v, out),
            TemporalValue::ZoneId(v) => encode::encode_zone_id(*v, out),
        }
    }

    /// Reconstruct the value of `kind` from one scalar
    pub fn decode(&self, kind: TemporalKind, slice: &Scalar) -> CodecResult<TemporalValue> {
        match kind {
            TemporalKind::Instant => decode::decode_instant(slice).map(TemporalValue::Instant),
            TemporalKind::LocalDate => {
                decode::decode_local_date(slice, self.legacy_zone).map(TemporalValue::LocalDate)
            }
            TemporalKind::LocalDateTime => decode::decode_local_date_time(slice, self.legacy_zone)
                .map(TemporalValue::LocalDateTime),
            TemporalKind::OffsetDateTime => {
                decode::decode_offset_date_time(slice, self.legacy_zone)
                    .map(TemporalValue::OffsetDateTime)
            }
            TemporalKind::ZonedDateTime => decode::decode_zoned_date_time(slice, self.legacy_zone)
                .map(TemporalValue::ZonedDateTime),
            TemporalKind::ZoneId => decode::decode_zone_id(slice).map(TemporalValue::ZoneId),
        }
    }
}

impl Default for TemporalCodec {
    fn default() -> Self {
        TemporalCodec::new(ZoneId::UTC)
    }
}
