use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::UnitError;
use crate::error::split_measure;

/// US liquid measures are used for the customary units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    Milliliters,
    Liters,
    Kiloliters,
    Gallons,
    Quarts,
    Pints,
    Cups,
    FluidOunces,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 8] = [
        VolumeUnit::Milliliters,
        VolumeUnit::Liters,
        VolumeUnit::Kiloliters,
        VolumeUnit::Gallons,
        VolumeUnit::Quarts,
        VolumeUnit::Pints,
        VolumeUnit::Cups,
        VolumeUnit::FluidOunces,
    ];

    fn liters_per_unit(self) -> f64 {
        match self {
            VolumeUnit::Milliliters => 0.001,
            VolumeUnit::Liters => 1.0,
            VolumeUnit::Kiloliters => 1000.0,
            VolumeUnit::Gallons => 3.785411784,
            VolumeUnit::Quarts => 0.946352946,
            VolumeUnit::Pints => 0.473176473,
            VolumeUnit::Cups => 0.2365882365,
            VolumeUnit::FluidOunces => 0.0295735295625,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VolumeUnit::Milliliters => "Milliliters",
            VolumeUnit::Liters => "Liters",
            VolumeUnit::Kiloliters => "Kiloliters",
            VolumeUnit::Gallons => "Gallons",
            VolumeUnit::Quarts => "Quarts",
            VolumeUnit::Pints => "Pints",
            VolumeUnit::Cups => "Cups",
            VolumeUnit::FluidOunces => "FluidOunces",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            VolumeUnit::Milliliters => "ml",
            VolumeUnit::Liters => "l",
            VolumeUnit::Kiloliters => "kl",
            VolumeUnit::Gallons => "gal",
            VolumeUnit::Quarts => "qt",
            VolumeUnit::Pints => "pt",
            VolumeUnit::Cups => "cup",
            VolumeUnit::FluidOunces => "floz",
        }
    }
}

impl FromStr for VolumeUnit {
    type Err = UnitError;

    /// Accepts the abbreviation or the (singular or plural) unit name,
    /// ASCII case-insensitive.
    fn from_str(text: &str) -> Result<Self, UnitError> {
        let lower = text.trim().to_ascii_lowercase();
        let unit = match lower.as_str() {
            "ml" | "milliliter" | "milliliters" => VolumeUnit::Milliliters,
            "l" | "liter" | "liters" => VolumeUnit::Liters,
            "kl" | "kiloliter" | "kiloliters" => VolumeUnit::Kiloliters,
            "gal" | "gallon" | "gallons" => VolumeUnit::Gallons,
            "qt" | "quart" | "quarts" => VolumeUnit::Quarts,
            "pt" | "pint" | "pints" => VolumeUnit::Pints,
            "cup" | "cups" => VolumeUnit::Cups,
            "floz" | "fluidounce" | "fluidounces" => VolumeUnit::FluidOunces,
            _ => {
                return Err(UnitError::UnknownUnit {
                    unit: text.trim().to_string(),
                });
            }
        };
        Ok(unit)
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A liquid measure: a magnitude paired with a [`VolumeUnit`].
#[derive(Debug, Clone, Copy)]
pub struct Volume {
    value: f64,
    unit: VolumeUnit,
}

impl Volume {
    pub fn new(value: f64, unit: VolumeUnit) -> Self {
        Self { value, unit }
    }

    pub fn milliliters(value: f64) -> Self {
        Self::new(value, VolumeUnit::Milliliters)
    }

    pub fn liters(value: f64) -> Self {
        Self::new(value, VolumeUnit::Liters)
    }

    pub fn kiloliters(value: f64) -> Self {
        Self::new(value, VolumeUnit::Kiloliters)
    }

    pub fn gallons(value: f64) -> Self {
        Self::new(value, VolumeUnit::Gallons)
    }

    pub fn quarts(value: f64) -> Self {
        Self::new(value, VolumeUnit::Quarts)
    }

    pub fn pints(value: f64) -> Self {
        Self::new(value, VolumeUnit::Pints)
    }

    pub fn cups(value: f64) -> Self {
        Self::new(value, VolumeUnit::Cups)
    }

    pub fn fluid_ounces(value: f64) -> Self {
        Self::new(value, VolumeUnit::FluidOunces)
    }

    pub fn zero() -> Self {
        Self::liters(0.0)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> VolumeUnit {
        self.unit
    }

    pub fn to_liters(&self) -> f64 {
        self.value * self.unit.liters_per_unit()
    }

    /// The same measure expressed in `unit`.
    pub fn convert_to(&self, unit: VolumeUnit) -> Self {
        Self::new(self.to_liters() / unit.liters_per_unit(), unit)
    }
}

impl Add for Volume {
    type Output = Volume;

    fn add(self, rhs: Volume) -> Volume {
        Volume::new(self.value + rhs.convert_to(self.unit).value, self.unit)
    }
}

impl Sub for Volume {
    type Output = Volume;

    fn sub(self, rhs: Volume) -> Volume {
        Volume::new(self.value - rhs.convert_to(self.unit).value, self.unit)
    }
}

impl Mul<f64> for Volume {
    type Output = Volume;

    fn mul(self, rhs: f64) -> Volume {
        Volume::new(self.value * rhs, self.unit)
    }
}

impl Div<f64> for Volume {
    type Output = Volume;

    /// # Panics
    ///
    /// Panics when dividing by zero.
    fn div(self, rhs: f64) -> Volume {
        assert!(rhs != 0.0, "cannot divide a volume by zero");
        Volume::new(self.value / rhs, self.unit)
    }
}

impl Neg for Volume {
    type Output = Volume;

    fn neg(self) -> Volume {
        Volume::new(-self.value, self.unit)
    }
}

impl PartialEq for Volume {
    fn eq(&self, other: &Volume) -> bool {
        self.to_liters() == other.to_liters()
    }
}

impl PartialOrd for Volume {
    fn partial_cmp(&self, other: &Volume) -> Option<std::cmp::Ordering> {
        self.to_liters().partial_cmp(&other.to_liters())
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.label())
    }
}

impl FromStr for Volume {
    type Err = UnitError;

    /// Parses measures like `500ml`, `2.5 l`, or `3 gallons`.
    fn from_str(text: &str) -> Result<Self, UnitError> {
        let (value, unit) = split_measure(text)?;
        Ok(Self::new(value, unit.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn conversion_goes_through_liters() {
        assert_close(Volume::gallons(1.0).convert_to(VolumeUnit::Liters).value(), 3.785411784);
        assert_close(Volume::gallons(1.0).convert_to(VolumeUnit::Quarts).value(), 4.0);
        assert_close(Volume::quarts(1.0).convert_to(VolumeUnit::Pints).value(), 2.0);
        assert_close(Volume::cups(1.0).convert_to(VolumeUnit::FluidOunces).value(), 8.0);
        assert_close(Volume::liters(1.0).convert_to(VolumeUnit::Milliliters).value(), 1000.0);
    }

    #[test]
    fn conversion_round_trips() {
        for unit in VolumeUnit::ALL {
            let volume = Volume::new(0.75, unit);
            let there_and_back = volume.convert_to(VolumeUnit::Gallons).convert_to(unit);
            assert_close(there_and_back.value(), 0.75);
        }
    }

    #[test]
    fn arithmetic_keeps_the_left_hand_unit() {
        let sum = Volume::liters(1.0) + Volume::milliliters(250.0);
        assert_eq!(sum.unit(), VolumeUnit::Liters);
        assert_close(sum.value(), 1.25);

        let difference = Volume::liters(2.0) - Volume::milliliters(500.0);
        assert_close(difference.value(), 1.5);

        assert_close((Volume::cups(2.0) * 3.0).value(), 6.0);
        assert_close((Volume::cups(3.0) / 2.0).value(), 1.5);
        assert_close((-Volume::pints(1.0)).value(), -1.0);
    }

    #[test]
    fn comparison_is_cross_unit() {
        assert_eq!(Volume::milliliters(1000.0), Volume::liters(1.0));
        assert!(Volume::gallons(1.0) > Volume::liters(3.0));
        assert!(Volume::fluid_ounces(1.0) < Volume::cups(1.0));
    }

    #[test]
    fn display_uses_the_unit_label() {
        assert_eq!(Volume::liters(2.5).to_string(), "2.5 Liters");
        assert_eq!(Volume::gallons(1.0).to_string(), "1 Gallons");
    }

    #[test]
    fn parses_abbreviations_and_names() {
        assert_eq!("500ml".parse::<Volume>().unwrap(), Volume::milliliters(500.0));
        assert_eq!("2.5 l".parse::<Volume>().unwrap(), Volume::liters(2.5));
        assert_eq!("3 gallons".parse::<Volume>().unwrap(), Volume::gallons(3.0));
    }

    #[test]
    fn parse_failures_are_recoverable() {
        assert_eq!(
            "3 barrels".parse::<Volume>().unwrap_err(),
            UnitError::UnknownUnit {
                unit: "barrels".to_string()
            }
        );
        assert_eq!(
            "many l".parse::<Volume>().unwrap_err(),
            UnitError::InvalidMagnitude {
                text: "many l".to_string()
            }
        );
    }
}
