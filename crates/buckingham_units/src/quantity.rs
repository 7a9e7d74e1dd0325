//! Named physical quantities and their base dimensions.
//!
//! The table is fixed: every [`Quantity`] maps to a [`DimVector`] through
//! [`Quantity::dim`], and textual names resolve through [`Quantity::from_name`].

use std::fmt;
use std::str::FromStr;

use crate::units::{si, DimVector};

/// A physical quantity type with a well-known dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Dimensionless,
    // Basic types
    Mass,
    Length,
    Time,
    Temperature,
    // Geometry
    Area,
    Volume,
    SecondMomentOfArea,
    // Kinematics
    Velocity,
    Acceleration,
    Angle,
    AngularVelocity,
    VolumeFlowRate,
    MassFlowRate,
    // Dynamics
    Force,
    Torque,
    Moment,
    Energy,
    Power,
    Pressure,
    Stress,
    // Fluid properties
    Density,
    Viscosity,
    KinematicViscosity,
    Conductivity,
    SpecificHeat,
}

impl Quantity {
    pub const ALL: [Quantity; 26] = [
        Quantity::Dimensionless,
        Quantity::Mass,
        Quantity::Length,
        Quantity::Time,
        Quantity::Temperature,
        Quantity::Area,
        Quantity::Volume,
        Quantity::SecondMomentOfArea,
        Quantity::Velocity,
        Quantity::Acceleration,
        Quantity::Angle,
        Quantity::AngularVelocity,
        Quantity::VolumeFlowRate,
        Quantity::MassFlowRate,
        Quantity::Force,
        Quantity::Torque,
        Quantity::Moment,
        Quantity::Energy,
        Quantity::Power,
        Quantity::Pressure,
        Quantity::Stress,
        Quantity::Density,
        Quantity::Viscosity,
        Quantity::KinematicViscosity,
        Quantity::Conductivity,
        Quantity::SpecificHeat,
    ];

    pub const fn dim(self) -> DimVector {
        match self {
            Quantity::Dimensionless | Quantity::Angle => si::DIMENSIONLESS,
            Quantity::Mass => si::MASS,
            Quantity::Length => si::LENGTH,
            Quantity::Time => si::TIME,
            Quantity::Temperature => si::TEMPERATURE,
            Quantity::Area => si::AREA,
            Quantity::Volume => si::VOLUME,
            Quantity::SecondMomentOfArea => si::SECOND_MOMENT_OF_AREA,
            Quantity::Velocity => si::VELOCITY,
            Quantity::Acceleration => si::ACCELERATION,
            Quantity::AngularVelocity => si::ANGULAR_VELOCITY,
            Quantity::VolumeFlowRate => si::VOLUME_FLOW_RATE,
            Quantity::MassFlowRate => si::MASS_FLOW_RATE,
            Quantity::Force => si::FORCE,
            Quantity::Torque | Quantity::Moment => si::TORQUE,
            Quantity::Energy => si::ENERGY,
            Quantity::Power => si::POWER,
            Quantity::Pressure | Quantity::Stress => si::PRESSURE,
            Quantity::Density => si::DENSITY,
            Quantity::Viscosity => si::DYNAMIC_VISCOSITY,
            Quantity::KinematicViscosity => si::KINEMATIC_VISCOSITY,
            Quantity::Conductivity => si::THERMAL_CONDUCTIVITY,
            Quantity::SpecificHeat => si::SPECIFIC_HEAT,
        }
    }

    /// Canonical camelCase name, as accepted by [`Quantity::from_name`].
    pub const fn name(self) -> &'static str {
        match self {
            Quantity::Dimensionless => "dimensionless",
            Quantity::Mass => "mass",
            Quantity::Length => "length",
            Quantity::Time => "time",
            Quantity::Temperature => "temperature",
            Quantity::Area => "area",
            Quantity::Volume => "volume",
            Quantity::SecondMomentOfArea => "secondMomentOfArea",
            Quantity::Velocity => "velocity",
            Quantity::Acceleration => "acceleration",
            Quantity::Angle => "angle",
            Quantity::AngularVelocity => "angularVelocity",
            Quantity::VolumeFlowRate => "volumeFlowRate",
            Quantity::MassFlowRate => "massFlowRate",
            Quantity::Force => "force",
            Quantity::Torque => "torque",
            Quantity::Moment => "moment",
            Quantity::Energy => "energy",
            Quantity::Power => "power",
            Quantity::Pressure => "pressure",
            Quantity::Stress => "stress",
            Quantity::Density => "density",
            Quantity::Viscosity => "viscosity",
            Quantity::KinematicViscosity => "kinematicViscosity",
            Quantity::Conductivity => "conductivity",
            Quantity::SpecificHeat => "specificHeat",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, QuantityError> {
        // Older problem files spell volume as "volumne".
        let canonical = match name {
            "volumne" => "volume",
            "volumneFlowRate" => "volumeFlowRate",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|q| q.name() == canonical)
            .ok_or_else(|| QuantityError::UnknownQuantity {
                name: name.to_string(),
            })
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for building dimensions from configuration data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantity name is not in the table.
    UnknownQuantity { name: String },
    /// Explicit exponent list has more entries than there are base dimensions.
    DimTooLong { len: usize },
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityError::UnknownQuantity { name } => {
                write!(f, "unknown quantity type '{}'", name)
            }
            QuantityError::DimTooLong { len } => write!(
                f,
                "dimension vector has {} exponents, at most {} are allowed",
                len,
                crate::units::NUM_BASE_DIMS
            ),
        }
    }
}

impl std::error::Error for QuantityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for q in Quantity::ALL {
            assert_eq!(Quantity::from_name(q.name()), Ok(q));
        }
    }

    #[test]
    fn table_matches_known_dimensions() {
        assert_eq!(Quantity::Force.dim(), DimVector::mlt(1.0, 1.0, -2.0));
        assert_eq!(Quantity::Viscosity.dim(), DimVector::mlt(1.0, -1.0, -1.0));
        assert_eq!(Quantity::Area.dim(), DimVector::mlt(0.0, 2.0, 0.0));
        assert_eq!(
            Quantity::Conductivity.dim(),
            DimVector::mlt_temp(1.0, 1.0, -3.0, -1.0)
        );
        assert!(Quantity::Angle.dim().is_dimensionless());
        assert_eq!(Quantity::Moment.dim(), Quantity::Torque.dim());
        assert_eq!(Quantity::Stress.dim(), Quantity::Pressure.dim());
    }

    #[test]
    fn legacy_spellings_are_accepted() {
        assert_eq!("volumne".parse::<Quantity>(), Ok(Quantity::Volume));
        assert_eq!(
            "volumneFlowRate".parse::<Quantity>(),
            Ok(Quantity::VolumeFlowRate)
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = Quantity::from_name("Force").unwrap_err();
        assert_eq!(
            err,
            QuantityError::UnknownQuantity {
                name: "Force".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown quantity type 'Force'");
    }
}
