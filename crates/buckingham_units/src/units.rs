use serde::{Deserialize, Serialize};
use std::fmt;

use crate::quantity::QuantityError;

/// Number of base dimensions every [`DimVector`] carries.
pub const NUM_BASE_DIMS: usize = 7;

/// The seven SI base dimensions, in the order used by [`DimVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDim {
    Mass,
    Length,
    Time,
    Temperature,
    Amount,
    Current,
    LuminousIntensity,
}

impl BaseDim {
    pub const ALL: [BaseDim; NUM_BASE_DIMS] = [
        BaseDim::Mass,
        BaseDim::Length,
        BaseDim::Time,
        BaseDim::Temperature,
        BaseDim::Amount,
        BaseDim::Current,
        BaseDim::LuminousIntensity,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// SI base unit symbol used when rendering a dimension.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDim::Mass => "kg",
            BaseDim::Length => "m",
            BaseDim::Time => "s",
            BaseDim::Temperature => "K",
            BaseDim::Amount => "mol",
            BaseDim::Current => "A",
            BaseDim::LuminousIntensity => "cd",
        }
    }
}

/// Physical dimension exponents over the seven SI base dimensions.
///
/// - `kg` = mass
/// - `m` = length
/// - `s` = time
/// - `K` = temperature
/// - `mol` = amount of substance
/// - `A` = electric current
/// - `cd` = luminous intensity
///
/// Exponents are real numbers. They are usually small integers, but the
/// analysis never assumes so.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimVector([f64; NUM_BASE_DIMS]);

impl DimVector {
    pub const fn new(exps: [f64; NUM_BASE_DIMS]) -> Self {
        Self(exps)
    }

    /// Mass, length and time exponents only.
    pub const fn mlt(m: f64, l: f64, t: f64) -> Self {
        Self([m, l, t, 0.0, 0.0, 0.0, 0.0])
    }

    pub const fn mlt_temp(m: f64, l: f64, t: f64, temp: f64) -> Self {
        Self([m, l, t, temp, 0.0, 0.0, 0.0])
    }

    pub const fn dimensionless() -> Self {
        Self([0.0; NUM_BASE_DIMS])
    }

    /// Builds a vector from a leading run of exponents, zero-padding the rest.
    pub fn from_slice(exps: &[f64]) -> Result<Self, QuantityError> {
        if exps.len() > NUM_BASE_DIMS {
            return Err(QuantityError::DimTooLong { len: exps.len() });
        }
        let mut out = [0.0; NUM_BASE_DIMS];
        out[..exps.len()].copy_from_slice(exps);
        Ok(Self(out))
    }

    pub const fn as_array(&self) -> &[f64; NUM_BASE_DIMS] {
        &self.0
    }

    pub fn exponent(&self, dim: BaseDim) -> f64 {
        self.0[dim.index()]
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|e| *e == 0.0)
    }

    /// True when every exponent is within `tol` of zero.
    pub fn is_near_dimensionless(&self, tol: f64) -> bool {
        self.0.iter().all(|e| e.abs() <= tol)
    }

    pub fn mul_dim(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o += r;
        }
        Self(out)
    }

    pub fn div_dim(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o -= r;
        }
        Self(out)
    }

    pub fn powf(self, exp: f64) -> Self {
        Self(self.0.map(|e| e * exp))
    }

    pub fn powi(self, exp: i32) -> Self {
        self.powf(exp as f64)
    }
}

impl From<[f64; NUM_BASE_DIMS]> for DimVector {
    fn from(exps: [f64; NUM_BASE_DIMS]) -> Self {
        Self(exps)
    }
}

impl std::ops::Mul for DimVector {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_dim(rhs)
    }
}

impl std::ops::Div for DimVector {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.div_dim(rhs)
    }
}

impl fmt::Display for DimVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        let mut parts = Vec::new();
        for dim in BaseDim::ALL {
            push_dim(&mut parts, dim.symbol(), self.exponent(dim));
        }
        write!(f, "{}", parts.join(" "))
    }
}

fn push_dim(parts: &mut Vec<String>, name: &str, exp: f64) {
    if exp == 0.0 {
        return;
    }
    if exp == 1.0 {
        parts.push(name.to_string());
    } else if exp.fract() == 0.0 {
        parts.push(format!("{name}^{}", exp as i64));
    } else {
        parts.push(format!("{name}^({exp})"));
    }
}

pub mod si {
    use super::DimVector;

    pub const DIMENSIONLESS: DimVector = DimVector::dimensionless();

    pub const MASS: DimVector = DimVector::mlt(1.0, 0.0, 0.0);
    pub const LENGTH: DimVector = DimVector::mlt(0.0, 1.0, 0.0);
    pub const TIME: DimVector = DimVector::mlt(0.0, 0.0, 1.0);
    pub const TEMPERATURE: DimVector = DimVector::mlt_temp(0.0, 0.0, 0.0, 1.0);
    pub const AMOUNT: DimVector = DimVector::new([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    pub const CURRENT: DimVector = DimVector::new([0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    pub const LUMINOUS_INTENSITY: DimVector = DimVector::new([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

    pub const AREA: DimVector = DimVector::mlt(0.0, 2.0, 0.0);
    pub const VOLUME: DimVector = DimVector::mlt(0.0, 3.0, 0.0);
    pub const SECOND_MOMENT_OF_AREA: DimVector = DimVector::mlt(0.0, 4.0, 0.0);

    pub const VELOCITY: DimVector = DimVector::mlt(0.0, 1.0, -1.0);
    pub const ACCELERATION: DimVector = DimVector::mlt(0.0, 1.0, -2.0);
    pub const ANGULAR_VELOCITY: DimVector = DimVector::mlt(0.0, 0.0, -1.0);
    pub const VOLUME_FLOW_RATE: DimVector = DimVector::mlt(0.0, 3.0, -1.0);
    pub const MASS_FLOW_RATE: DimVector = DimVector::mlt(1.0, 0.0, -1.0);

    pub const FORCE: DimVector = DimVector::mlt(1.0, 1.0, -2.0); // N = kg·m/s^2
    pub const TORQUE: DimVector = DimVector::mlt(1.0, 2.0, -2.0);
    pub const ENERGY: DimVector = DimVector::mlt(1.0, 2.0, -2.0);
    pub const POWER: DimVector = DimVector::mlt(1.0, 2.0, -3.0); // W = kg·m^2/s^3
    pub const PRESSURE: DimVector = DimVector::mlt(1.0, -1.0, -2.0);

    pub const DENSITY: DimVector = DimVector::mlt(1.0, -3.0, 0.0);
    pub const DYNAMIC_VISCOSITY: DimVector = DimVector::mlt(1.0, -1.0, -1.0);
    pub const KINEMATIC_VISCOSITY: DimVector = DimVector::mlt(0.0, 2.0, -1.0);
    pub const THERMAL_CONDUCTIVITY: DimVector = DimVector::mlt_temp(1.0, 1.0, -3.0, -1.0);
    pub const SPECIFIC_HEAT: DimVector = DimVector::mlt_temp(0.0, 2.0, -2.0, -1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_pads_with_zeros() {
        let dim = DimVector::from_slice(&[1.0, -2.0, -2.0]).unwrap();
        assert_eq!(dim, DimVector::mlt(1.0, -2.0, -2.0));
        assert_eq!(dim.exponent(BaseDim::Amount), 0.0);
        assert_eq!(DimVector::from_slice(&[]).unwrap(), si::DIMENSIONLESS);
    }

    #[test]
    fn from_slice_rejects_more_than_seven_exponents() {
        let err = DimVector::from_slice(&[0.0; 8]).unwrap_err();
        assert_eq!(err, QuantityError::DimTooLong { len: 8 });
    }

    #[test]
    fn si_derived_units_match_expected_dimensions() {
        assert_eq!(si::LENGTH * si::LENGTH, si::AREA);
        assert_eq!(si::AREA * si::LENGTH, si::VOLUME);
        assert_eq!(si::AREA.powi(2), si::SECOND_MOMENT_OF_AREA);

        assert_eq!(si::LENGTH / si::TIME, si::VELOCITY);
        assert_eq!(si::VELOCITY / si::TIME, si::ACCELERATION);
        assert_eq!(si::TIME.powi(-1), si::ANGULAR_VELOCITY);

        assert_eq!(si::MASS * si::ACCELERATION, si::FORCE);
        assert_eq!(si::FORCE * si::LENGTH, si::ENERGY);
        assert_eq!(si::ENERGY / si::TIME, si::POWER);
        assert_eq!(si::FORCE / si::AREA, si::PRESSURE);

        assert_eq!(si::MASS / si::VOLUME, si::DENSITY);
        assert_eq!(si::PRESSURE * si::TIME, si::DYNAMIC_VISCOSITY);
        assert_eq!(si::DYNAMIC_VISCOSITY / si::DENSITY, si::KINEMATIC_VISCOSITY);
        assert_eq!(
            si::POWER / si::LENGTH / si::TEMPERATURE,
            si::THERMAL_CONDUCTIVITY
        );
    }

    #[test]
    fn fractional_powers_are_allowed() {
        let sqrt_area = si::AREA.powf(0.5);
        assert_eq!(sqrt_area, si::LENGTH);
        assert!(!sqrt_area.is_dimensionless());
        assert!((si::FORCE / si::FORCE).is_dimensionless());
    }

    #[test]
    fn unit_display_uses_si_base_names() {
        assert_eq!(si::DIMENSIONLESS.to_string(), "1");
        assert_eq!(si::LENGTH.to_string(), "m");
        assert_eq!(si::MASS.to_string(), "kg");
        assert_eq!(si::TEMPERATURE.to_string(), "K");
        assert_eq!(si::CURRENT.to_string(), "A");

        assert_eq!(si::DENSITY.to_string(), "kg m^-3");
        assert_eq!(si::FORCE.to_string(), "kg m s^-2");
        assert_eq!(si::SPECIFIC_HEAT.to_string(), "m^2 s^-2 K^-1");

        assert_eq!(si::LENGTH.powf(0.5).to_string(), "m^(0.5)");
    }
}
