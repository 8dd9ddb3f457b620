//! Named parameter sets that draw well-known spirograph figures.

use crate::errors::CurveError;
use crate::float_types::Real;
use crate::request::{CurveRequest, Mode};
use std::fmt;
use std::str::FromStr;

/// A ready-made ring/wheel/pen combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    ClassicFlower,
    Starburst,
    Rosette,
    ToroidalDonut,
    ComplexRosette,
    FineLineFlower,
    SimpleEpicycloid,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::ClassicFlower,
        Preset::Starburst,
        Preset::Rosette,
        Preset::ToroidalDonut,
        Preset::ComplexRosette,
        Preset::FineLineFlower,
        Preset::SimpleEpicycloid,
    ];

    /// The camelCase name hosts use to refer to the preset.
    pub const fn name(self) -> &'static str {
        match self {
            Preset::ClassicFlower => "classicFlower",
            Preset::Starburst => "starburst",
            Preset::Rosette => "rosette",
            Preset::ToroidalDonut => "toroidalDonut",
            Preset::ComplexRosette => "complexRosette",
            Preset::FineLineFlower => "fineLineFlower",
            Preset::SimpleEpicycloid => "simpleEpicycloid",
        }
    }

    /// `(ring, wheel, pen offset, mode)`
    const fn parameters(self) -> (Real, Real, Real, Mode) {
        match self {
            Preset::ClassicFlower => (200.0, 120.0, 100.0, Mode::Inside),
            Preset::Starburst => (160.0, 40.0, 80.0, Mode::Inside),
            Preset::Rosette => (240.0, 100.0, 120.0, Mode::Outside),
            Preset::ToroidalDonut => (240.0, 200.0, 100.0, Mode::Inside),
            Preset::ComplexRosette => (210.0, 120.0, 150.0, Mode::Inside),
            Preset::FineLineFlower => (200.0, 160.0, 180.0, Mode::Inside),
            Preset::SimpleEpicycloid => (180.0, 60.0, 60.0, Mode::Outside),
        }
    }

    /// A single-pen request for this preset.
    pub fn request(self) -> CurveRequest {
        let (ring, wheel, offset, mode) = self.parameters();
        CurveRequest::new(ring, wheel, vec![offset], mode)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CurveError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
        }
        assert_eq!("STARBURST".parse::<Preset>(), Ok(Preset::Starburst));
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            "spiral".parse::<Preset>(),
            Err(CurveError::UnknownPreset("spiral".to_string()))
        );
    }

    #[test]
    fn requests_are_valid() {
        for preset in Preset::ALL {
            assert!(preset.request().validate().is_ok(), "{preset} should validate");
        }
        assert_eq!(Preset::Rosette.request().mode, Mode::Outside);
    }
}
