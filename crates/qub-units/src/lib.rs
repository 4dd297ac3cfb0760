//! Unit-of-measure value types.
//!
//! A value pairs a magnitude with a unit; conversion goes through a
//! per-dimension base unit (meters, liters) with a fixed factor table.
//! Arithmetic converts the right-hand side into the left-hand side's unit,
//! so `2km + 500m` is `2.5km`. Comparison and equality are cross-unit.
//!
//! Parsing (`"5km"`, `"2.5 l"`) is how user-facing tools take measures on
//! the command line; a bad magnitude or unknown unit is a recoverable
//! [`UnitError`].

mod distance;
mod error;
mod volume;

pub use distance::{Distance, DistanceUnit};
pub use error::UnitError;
pub use volume::{Volume, VolumeUnit};

/// The original framework exposed the linear dimension under both names;
/// they are one type here.
pub type Length = Distance;
pub type LengthUnit = DistanceUnit;
