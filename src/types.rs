use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

// Error correction level
//------------------------------------------------------------------------------

/// Error correction level, ordered by increasing redundancy.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L,
    M,
    Q,
    H,
}

impl ECLevel {
    /// Resolves a desired error tolerance percentage to the smallest level
    /// whose guaranteed recovery rate covers it.
    ///
    /// Accepts 0-100 inclusive. Values above 30 still resolve to `H`, with an
    /// advisory: 30% is the strongest recovery the symbol format offers.
    pub fn from_percent(percent: i64) -> Result<(Self, Option<Advisory>)> {
        if !(0..=100).contains(&percent) {
            return Err(Error::InvalidParameter(format!(
                "error tolerance {percent} must be in range 0-100"
            )));
        }
        let level = if percent <= 7 {
            Self::L
        } else if percent <= 15 {
            Self::M
        } else if percent <= 25 {
            Self::Q
        } else {
            Self::H
        };
        let advisory =
            (percent > 30).then_some(Advisory::ToleranceAboveCeiling { requested: percent });
        Ok((level, advisory))
    }

    /// Nominal recovery percentage guaranteed by the level.
    pub const fn tolerance(self) -> u8 {
        match self {
            Self::L => 7,
            Self::M => 15,
            Self::Q => 25,
            Self::H => 30,
        }
    }
}

impl From<ECLevel> for qrcode::EcLevel {
    fn from(level: ECLevel) -> Self {
        match level {
            ECLevel::L => Self::L,
            ECLevel::M => Self::M,
            ECLevel::Q => Self::Q,
            ECLevel::H => Self::H,
        }
    }
}

// Symbol version
//------------------------------------------------------------------------------

/// Symbol version in 1-40. At the config level `None` stands for auto-fit,
/// where the encoder picks the smallest version that holds the payload.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct SymbolVersion(i16);

impl SymbolVersion {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 40;

    pub fn new(version: i16) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&version) {
            return Err(Error::InvalidParameter(format!(
                "version {version} must be in range {}-{}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(version))
    }

    /// Validates an optional user-supplied version. `None` passes through
    /// unchanged and enables auto-fit downstream.
    pub fn validate(version: Option<i16>) -> Result<Option<Self>> {
        version.map(Self::new).transpose()
    }

    pub const fn number(self) -> i16 {
        self.0
    }
}

impl From<SymbolVersion> for qrcode::Version {
    fn from(version: SymbolVersion) -> Self {
        Self::Normal(version.0)
    }
}

// Renderer backend
//------------------------------------------------------------------------------

/// Closed set of named renderer backends.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Backend {
    /// Vector image, one rect per dark module.
    Svg,
    /// Vector image, all dark modules in a single path.
    SvgPath,
    /// Vector image with a solid background fill.
    SvgFill,
    /// Monochrome raster image.
    Png,
}

impl Backend {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "svg" => Some(Self::Svg),
            "svgpath" => Some(Self::SvgPath),
            "svgfill" => Some(Self::SvgFill),
            "png" | "pymaging" => Some(Self::Png),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::SvgPath => "svgpath",
            Self::SvgFill => "svgfill",
            Self::Png => "png",
        }
    }
}

// Advisory
//------------------------------------------------------------------------------

/// Non-fatal signal surfaced to the user alongside a successful result.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Advisory {
    ToleranceAboveCeiling { requested: i64 },
    ColorsIgnored { backend: Backend },
    UnknownBackend { name: String },
}

impl Display for Advisory {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::ToleranceAboveCeiling { requested } => write!(
                f,
                "error tolerance {requested} is above the strongest supported recovery rate (30), using level H"
            ),
            Self::ColorsIgnored { backend } => write!(
                f,
                "ignoring explicit colors: the {} backend does not support them",
                backend.name()
            ),
            Self::UnknownBackend { name } => {
                write!(f, "unknown renderer backend '{name}', using default")
            }
        }
    }
}


#[cfg(test)]
mod level_proptests {
    use proptest::prelude::*;

    use super::ECLevel;

    proptest! {
        #[test]
        fn proptest_from_percent_total(percent in 0i64..=100) {
            let (level, advisory) = ECLevel::from_percent(percent).unwrap();
            prop_assert!(i64::from(level.tolerance()) >= percent.min(30));
            prop_assert_eq!(advisory.is_some(), percent > 30);
        }

        #[test]
        fn proptest_from_percent_monotonic(a in 0i64..=100, b in 0i64..=100) {
            let (la, _) = ECLevel::from_percent(a).unwrap();
            let (lb, _) = ECLevel::from_percent(b).unwrap();
            if a <= b {
                prop_assert!(la <= lb);
            }
        }
    }
}

#[cfg(test)]
mod version_tests {
    use test_case::test_case;

    use super::SymbolVersion;
    use crate::error::Error;

    #[test]
    fn test_validate_full_range() {
        for v in SymbolVersion::MIN..=SymbolVersion::MAX {
            let validated = SymbolVersion::validate(Some(v)).unwrap();
            assert_eq!(validated.unwrap().number(), v);
        }
    }

    #[test_case(0)]
    #[test_case(41)]
    #[test_case(-7)]
    fn test_validate_out_of_range(version: i16) {
        let err = SymbolVersion::validate(Some(version)).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_validate_none_passes_through() {
        assert_eq!(SymbolVersion::validate(None).unwrap(), None);
    }
}
