//! Provides [`Crs`], the coordinate reference systems.
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the coordinate reference system of a position.
///
/// # Example
///
/// ```
/// # use chinacoord::*;
/// #
/// assert_eq!("GCJ-02".parse::<Crs>()?, Crs::Gcj02);
/// assert_eq!("bd09".parse::<Crs>()?, Crs::Bd09);
/// assert_eq!(Crs::Wgs84.to_string(), "WGS-84");
/// # Ok::<(), ParseCrsError>(())
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Crs {
    /// The World Geodetic System 1984, used by GPS.
    Wgs84,
    /// The obfuscated system mandated in China, a.k.a. Mars coordinates.
    Gcj02,
    /// The Baidu system, a further obfuscation of [`Crs::Gcj02`].
    Bd09,
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wgs84 => f.write_str("WGS-84"),
            Self::Gcj02 => f.write_str("GCJ-02"),
            Self::Bd09 => f.write_str("BD-09"),
        }
    }
}

impl FromStr for Crs {
    type Err = ParseCrsError;

    /// Parses a case-insensitive name, with or without hyphen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCrsError::new_empty());
        }

        match s.to_ascii_uppercase().as_str() {
            "WGS84" | "WGS-84" => Ok(Self::Wgs84),
            "GCJ02" | "GCJ-02" => Ok(Self::Gcj02),
            "BD09" | "BD-09" => Ok(Self::Bd09),
            _ => Err(ParseCrsError::new_unknown()),
        }
    }
}

/// An error which can be returned when parsing a [`Crs`].
#[derive(Debug, PartialEq, Eq)]
pub struct ParseCrsError {
    kind: ParseCrsErrorKind,
}

/// An error kind used by [`ParseCrsError`].
#[derive(Debug, PartialEq, Eq)]
pub enum ParseCrsErrorKind {
    Empty,
    Unknown,
}

impl ParseCrsError {
    #[cold]
    const fn new_empty() -> Self {
        Self {
            kind: ParseCrsErrorKind::Empty,
        }
    }

    #[cold]
    const fn new_unknown() -> Self {
        Self {
            kind: ParseCrsErrorKind::Unknown,
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &ParseCrsErrorKind {
        &self.kind
    }
}

impl Error for ParseCrsError {}

impl Display for ParseCrsError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.kind {
            ParseCrsErrorKind::Empty => f.write_str("cannot parse CRS from empty string"),
            ParseCrsErrorKind::Unknown => {
                f.write_str("unknown CRS, expected WGS-84, GCJ-02 or BD-09")
            }
        }
    }
}
