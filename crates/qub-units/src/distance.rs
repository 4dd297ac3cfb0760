use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::UnitError;
use crate::error::split_measure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    Inches,
    Feet,
    Miles,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 7] = [
        DistanceUnit::Millimeters,
        DistanceUnit::Centimeters,
        DistanceUnit::Meters,
        DistanceUnit::Kilometers,
        DistanceUnit::Inches,
        DistanceUnit::Feet,
        DistanceUnit::Miles,
    ];

    fn meters_per_unit(self) -> f64 {
        match self {
            DistanceUnit::Millimeters => 0.001,
            DistanceUnit::Centimeters => 0.01,
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => 1000.0,
            DistanceUnit::Inches => 0.0254,
            DistanceUnit::Feet => 0.3048,
            DistanceUnit::Miles => 1609.344,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Millimeters => "Millimeters",
            DistanceUnit::Centimeters => "Centimeters",
            DistanceUnit::Meters => "Meters",
            DistanceUnit::Kilometers => "Kilometers",
            DistanceUnit::Inches => "Inches",
            DistanceUnit::Feet => "Feet",
            DistanceUnit::Miles => "Miles",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            DistanceUnit::Millimeters => "mm",
            DistanceUnit::Centimeters => "cm",
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Inches => "in",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Miles => "mi",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = UnitError;

    /// Accepts the abbreviation or the (singular or plural) unit name,
    /// ASCII case-insensitive.
    fn from_str(text: &str) -> Result<Self, UnitError> {
        let lower = text.trim().to_ascii_lowercase();
        let unit = match lower.as_str() {
            "mm" | "millimeter" | "millimeters" => DistanceUnit::Millimeters,
            "cm" | "centimeter" | "centimeters" => DistanceUnit::Centimeters,
            "m" | "meter" | "meters" => DistanceUnit::Meters,
            "km" | "kilometer" | "kilometers" => DistanceUnit::Kilometers,
            "in" | "inch" | "inches" => DistanceUnit::Inches,
            "ft" | "foot" | "feet" => DistanceUnit::Feet,
            "mi" | "mile" | "miles" => DistanceUnit::Miles,
            _ => {
                return Err(UnitError::UnknownUnit {
                    unit: text.trim().to_string(),
                });
            }
        };
        Ok(unit)
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A linear measure: a magnitude paired with a [`DistanceUnit`].
#[derive(Debug, Clone, Copy)]
pub struct Distance {
    value: f64,
    unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub fn millimeters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Millimeters)
    }

    pub fn centimeters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Centimeters)
    }

    pub fn meters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Meters)
    }

    pub fn kilometers(value: f64) -> Self {
        Self::new(value, DistanceUnit::Kilometers)
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, DistanceUnit::Inches)
    }

    pub fn feet(value: f64) -> Self {
        Self::new(value, DistanceUnit::Feet)
    }

    pub fn miles(value: f64) -> Self {
        Self::new(value, DistanceUnit::Miles)
    }

    pub fn zero() -> Self {
        Self::meters(0.0)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn to_meters(&self) -> f64 {
        self.value * self.unit.meters_per_unit()
    }

    /// The same measure expressed in `unit`.
    pub fn convert_to(&self, unit: DistanceUnit) -> Self {
        Self::new(self.to_meters() / unit.meters_per_unit(), unit)
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        Distance::new(self.value + rhs.convert_to(self.unit).value, self.unit)
    }
}

impl Sub for Distance {
    type Output = Distance;

    fn sub(self, rhs: Distance) -> Distance {
        Distance::new(self.value - rhs.convert_to(self.unit).value, self.unit)
    }
}

impl Mul<f64> for Distance {
    type Output = Distance;

    fn mul(self, rhs: f64) -> Distance {
        Distance::new(self.value * rhs, self.unit)
    }
}

impl Div<f64> for Distance {
    type Output = Distance;

    /// # Panics
    ///
    /// Panics when dividing by zero.
    fn div(self, rhs: f64) -> Distance {
        assert!(rhs != 0.0, "cannot divide a distance by zero");
        Distance::new(self.value / rhs, self.unit)
    }
}

impl Neg for Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        Distance::new(-self.value, self.unit)
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Distance) -> bool {
        self.to_meters() == other.to_meters()
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Distance) -> Option<std::cmp::Ordering> {
        self.to_meters().partial_cmp(&other.to_meters())
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.label())
    }
}

impl FromStr for Distance {
    type Err = UnitError;

    /// Parses measures like `5km`, `26.2 mi`, or `3 meters`.
    fn from_str(text: &str) -> Result<Self, UnitError> {
        let (value, unit) = split_measure(text)?;
        Ok(Self::new(value, unit.parse()?))
    }
}
