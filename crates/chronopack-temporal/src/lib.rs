//! chronopack Temporal - Date/time codecs for the binary container format
//!
//! Converts native temporal values into canonical string scalars and back:
//! - Instant, LocalDate, LocalDateTime, OffsetDateTime, ZonedDateTime, ZoneId
//! - One canonical rendering per kind on encode
//! - Canonical strings plus legacy epoch-millisecond integers on decode
//! - Zone and offset identity preserved across hosts with different
//!   zone configuration

pub mod codec;
pub mod decode;
pub mod encode;
pub mod format;
pub mod zone;

pub use codec::*;
pub use decode::*;
pub use encode::*;
pub use format::*;
pub use zone::*;
