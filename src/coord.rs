//! Provides [`Coordinate`], a position on the Earth.
use std::error::Error;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{trans, Crs, TransformError};

/// Represents a position on the Earth, a pair of longitude and latitude.
///
/// The order is longitude first, latitude second, everywhere in this crate.
/// This does not know its [`Crs`], the conversion methods do not check it.
///
/// # Example
///
/// ```
/// # use chinacoord::*;
/// #
/// let wgs84 = Coordinate::new(116.404, 39.915);
/// assert_eq!(wgs84.longitude, 116.404);
/// assert_eq!(wgs84.latitude, 39.915);
///
/// let gcj02 = wgs84.wgs84_to_gcj02();
/// assert_eq!(gcj02, wgs84.convert(Crs::Wgs84, Crs::Gcj02));
///
/// // from/into tuple
/// assert_eq!(Coordinate::from((116.404, 39.915)), wgs84);
/// assert_eq!(<(f64, f64)>::from(wgs84), (116.404, 39.915));
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// The longitude \[deg\] of the position
    pub longitude: f64,
    /// The latitude \[deg\] of the position
    pub latitude: f64,
}

impl From<(f64, f64)> for Coordinate {
    /// see [`Coordinate::new()`]
    #[inline]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<[f64; 2]> for Coordinate {
    /// see [`Coordinate::new()`]
    #[inline]
    fn from(rhs: [f64; 2]) -> Self {
        Self::new(rhs[0], rhs[1])
    }
}

impl From<Coordinate> for (f64, f64) {
    #[inline]
    fn from(rhs: Coordinate) -> Self {
        (rhs.longitude, rhs.latitude)
    }
}

macro_rules! impl_conversion {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[inline]
        #[must_use]
        pub fn $name(&self) -> Self {
            trans::$name(self.longitude, self.latitude).into()
        }
    };
}

impl Coordinate {
    /// Makes a [`Coordinate`].
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use chinacoord::*;
    /// #
    /// let coord = Coordinate::new(116.404, 39.915);
    /// assert_eq!(coord.longitude, 116.404);
    /// assert_eq!(coord.latitude, 39.915);
    /// ```
    #[inline]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Makes a [`Coordinate`] with checking.
    ///
    /// # Errors
    ///
    /// If `longitude` and/or `latitude` is NaN or out-of-range,
    /// `longitude` must satisfy -180.0 <= and <= 180.0
    /// and `latitude` does -90.0 <= and <= 90.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use chinacoord::*;
    /// #
    /// let coord = Coordinate::try_new(116.404, 39.915)?;
    /// assert_eq!(coord, Coordinate::new(116.404, 39.915));
    ///
    /// // If out-of-range, returns Err
    /// assert!(Coordinate::try_new(181.0, 39.915).is_err());
    /// assert!(Coordinate::try_new(116.404, -91.0).is_err());
    /// assert!(Coordinate::try_new(f64::NAN, 39.915).is_err());
    /// assert!(Coordinate::try_new(116.404, f64::INFINITY).is_err());
    /// # Ok::<(), CoordinateError>(())
    /// ```
    pub fn try_new(longitude: f64, latitude: f64) -> Result<Self, CoordinateError> {
        if longitude.is_nan() {
            return Err(CoordinateError::new_nan(ErrorAxis::Longitude));
        };
        if longitude < -180.0 || 180.0 < longitude {
            return Err(CoordinateError::new_oor(ErrorAxis::Longitude));
        };
        if latitude.is_nan() {
            return Err(CoordinateError::new_nan(ErrorAxis::Latitude));
        };
        if latitude < -90.0 || 90.0 < latitude {
            return Err(CoordinateError::new_oor(ErrorAxis::Latitude));
        };

        Ok(Self::new(longitude, latitude))
    }

    impl_conversion!(
        /// Returns the GCJ-02 position of `self` in BD-09, see [`trans::bd09_to_gcj02`].
        bd09_to_gcj02
    );
    impl_conversion!(
        /// Returns the BD-09 position of `self` in GCJ-02, see [`trans::gcj02_to_bd09`].
        gcj02_to_bd09
    );
    impl_conversion!(
        /// Returns the GCJ-02 position of `self` in WGS-84, see [`trans::wgs84_to_gcj02`].
        ///
        /// # Example
        ///
        /// ```
        /// # use chinacoord::*;
        /// #
        /// // out of China
        /// let coord = Coordinate::new(0.0, 0.0);
        /// assert_eq!(coord.wgs84_to_gcj02(), coord);
        /// ```
        wgs84_to_gcj02
    );
    impl_conversion!(
        /// Returns the WGS-84 position of `self` in GCJ-02, see [`trans::gcj02_to_wgs84`].
        gcj02_to_wgs84
    );
    impl_conversion!(
        /// Returns the BD-09 position of `self` in WGS-84, see [`trans::wgs84_to_bd09`].
        wgs84_to_bd09
    );
    impl_conversion!(
        /// Returns the WGS-84 position of `self` in BD-09, see [`trans::bd09_to_wgs84`].
        bd09_to_wgs84
    );

    /// Returns the verified WGS-84 position of `self` in GCJ-02.
    ///
    /// See [`trans::gcj02_to_wgs84_exact`] for detail.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] when the iteration does not converge.
    #[inline]
    pub fn gcj02_to_wgs84_exact(&self) -> Result<Self, TransformError> {
        trans::gcj02_to_wgs84_exact(self.longitude, self.latitude).map(Self::from)
    }

    /// Returns the position in `to` of `self` in `from`.
    ///
    /// # Example
    ///
    /// ```
    /// # use chinacoord::*;
    /// #
    /// let coord = Coordinate::new(116.404, 39.915);
    /// assert_eq!(coord.convert(Crs::Bd09, Crs::Wgs84), coord.bd09_to_wgs84());
    /// assert_eq!(coord.convert(Crs::Bd09, Crs::Bd09), coord);
    /// ```
    #[inline]
    #[must_use]
    pub fn convert(&self, from: Crs, to: Crs) -> Self {
        trans::convert(from, to, self.longitude, self.latitude).into()
    }
}

/// An error which can be returned on checked constructing of [`Coordinate`].
#[derive(Debug, PartialEq, Eq)]
pub struct CoordinateError {
    axis: ErrorAxis,
    kind: CoordinateErrorKind,
}

/// An axis used by [`CoordinateError`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorAxis {
    Longitude,
    Latitude,
}

/// An error kind used by [`CoordinateError`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CoordinateErrorKind {
    NaN,
    OutOfRange,
}

impl CoordinateError {
    #[cold]
    const fn new_nan(axis: ErrorAxis) -> Self {
        Self {
            axis,
            kind: CoordinateErrorKind::NaN,
        }
    }

    #[cold]
    const fn new_oor(axis: ErrorAxis) -> Self {
        Self {
            axis,
            kind: CoordinateErrorKind::OutOfRange,
        }
    }

    /// Returns the axis where the error occurred.
    pub const fn axis(&self) -> &ErrorAxis {
        &self.axis
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &CoordinateErrorKind {
        &self.kind
    }
}

impl Error for CoordinateError {}

impl Display for ErrorAxis {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Longitude => f.write_str("longitude"),
            Self::Latitude => f.write_str("latitude"),
        }
    }
}

impl Display for CoordinateError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match (self.kind, self.axis) {
            (CoordinateErrorKind::NaN, axis) => write!(f, "invalid {axis}: NaN"),
            (CoordinateErrorKind::OutOfRange, ErrorAxis::Longitude) => {
                f.write_str("invalid longitude: must satisfy -180.0 <= and <= 180.0")
            }
            (CoordinateErrorKind::OutOfRange, ErrorAxis::Latitude) => {
                f.write_str("invalid latitude: must satisfy -90.0 <= and <= 90.0")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_try_new() {
        // healthy
        for (lng, lat) in [
            (0.0, 0.0),
            (180.0, 90.0),
            (-180.0, -90.0),
            (116.404, 39.915),
        ] {
            assert_eq!(Coordinate::try_new(lng, lat), Ok(Coordinate::new(lng, lat)));
        }

        // error
        let cases = [
            ((f64::NAN, 0.0), (ErrorAxis::Longitude, CoordinateErrorKind::NaN)),
            ((0.0, f64::NAN), (ErrorAxis::Latitude, CoordinateErrorKind::NaN)),
            (
                (180.0_f64.next_up(), 0.0),
                (ErrorAxis::Longitude, CoordinateErrorKind::OutOfRange),
            ),
            (
                ((-180.0_f64).next_down(), 0.0),
                (ErrorAxis::Longitude, CoordinateErrorKind::OutOfRange),
            ),
            (
                (0.0, 90.0_f64.next_up()),
                (ErrorAxis::Latitude, CoordinateErrorKind::OutOfRange),
            ),
            (
                (0.0, f64::NEG_INFINITY),
                (ErrorAxis::Latitude, CoordinateErrorKind::OutOfRange),
            ),
            (
                (f64::INFINITY, f64::NAN),
                (ErrorAxis::Longitude, CoordinateErrorKind::OutOfRange),
            ),
        ];

        for ((lng, lat), (axis, kind)) in cases {
            let e = Coordinate::try_new(lng, lat).unwrap_err();
            assert_eq!(e.axis(), &axis);
            assert_eq!(e.kind(), &kind);
        }
    }

    #[test]
    fn test_error_display() {
        let e = Coordinate::try_new(f64::NAN, 0.0).unwrap_err();
        assert_eq!(e.to_string(), "invalid longitude: NaN");
        let e = Coordinate::try_new(0.0, 100.0).unwrap_err();
        assert_eq!(
            e.to_string(),
            "invalid latitude: must satisfy -90.0 <= and <= 90.0"
        );
    }

    #[test]
    fn test_from() {
        let coord = Coordinate::new(116.404, 39.915);
        assert_eq!(Coordinate::from((116.404, 39.915)), coord);
        assert_eq!(Coordinate::from([116.404, 39.915]), coord);
        assert_eq!(<(f64, f64)>::from(coord), (116.404, 39.915));
    }

    #[test]
    fn test_conversion() {
        let coord = Coordinate::new(116.404, 39.915);
        let (lng, lat) = (coord.longitude, coord.latitude);

        assert_eq!(coord.bd09_to_gcj02(), trans::bd09_to_gcj02(lng, lat).into());
        assert_eq!(coord.gcj02_to_bd09(), trans::gcj02_to_bd09(lng, lat).into());
        assert_eq!(coord.wgs84_to_gcj02(), trans::wgs84_to_gcj02(lng, lat).into());
        assert_eq!(coord.gcj02_to_wgs84(), trans::gcj02_to_wgs84(lng, lat).into());
        assert_eq!(coord.wgs84_to_bd09(), trans::wgs84_to_bd09(lng, lat).into());
        assert_eq!(coord.bd09_to_wgs84(), trans::bd09_to_wgs84(lng, lat).into());
        assert_eq!(
            coord.gcj02_to_wgs84_exact(),
            trans::gcj02_to_wgs84_exact(lng, lat).map(Coordinate::from)
        );

        // order is kept, longitude first
        let gcj02 = coord.wgs84_to_gcj02();
        assert!((gcj02.longitude - 116.41024449916938).abs() < 1e-9);
        assert!((gcj02.latitude - 39.91640428150164).abs() < 1e-9);
    }

    #[test]
    fn test_convert() {
        let coord = Coordinate::new(121.4737, 31.2304);
        assert_eq!(coord.convert(Crs::Wgs84, Crs::Gcj02), coord.wgs84_to_gcj02());
        assert_eq!(coord.convert(Crs::Gcj02, Crs::Wgs84), coord.gcj02_to_wgs84());
        assert_eq!(coord.convert(Crs::Wgs84, Crs::Wgs84), coord);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Coordinate::new(116.404, 39.915),
            &[
                Token::Struct {
                    name: "Coordinate",
                    len: 2,
                },
                Token::Str("longitude"),
                Token::F64(116.404),
                Token::Str("latitude"),
                Token::F64(39.915),
                Token::StructEnd,
            ],
        );
    }
}
