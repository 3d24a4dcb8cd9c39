//! Provides conversion between WGS-84, GCJ-02 and BD-09.
use std::error::Error;
use std::fmt::{Display, Formatter};

use log::{debug, trace};

use crate::Crs;

type Result<T> = std::result::Result<T, TransformError>;

#[allow(clippy::approx_constant, clippy::excessive_precision)]
const X_PI: f64 = 3.14159265358979324 * 3000.0 / 180.0;
#[allow(clippy::approx_constant, clippy::excessive_precision)]
const PI: f64 = 3.1415926535897932384626;
/// Semi-major axis of the Krasovsky 1940 ellipsoid \[m\]
const A: f64 = 6378245.0;
/// Eccentricity squared of the Krasovsky 1940 ellipsoid
#[allow(clippy::excessive_precision)]
const EE: f64 = 0.00669342162296594323;

/// Max error of [`gcj02_to_wgs84_exact`] \[deg\].
pub const MAX_ERROR: f64 = 1e-12;

/// Max iteration of [`gcj02_to_wgs84_exact`].
pub const ITERATION: usize = 16;

/// Returns `true` unless the position is in the rectangle which approximates mainland China.
#[inline]
fn out_of_china(lng: f64, lat: f64) -> bool {
    !(lng > 73.66 && lng < 135.05 && lat > 3.86 && lat < 53.55)
}

#[inline]
fn transform_lat(lng: f64, lat: f64) -> f64 {
    let mut ret = -100.0
        + 2.0 * lng
        + 3.0 * lat
        + 0.2 * lat * lat
        + 0.1 * lng * lat
        + 0.2 * lng.abs().sqrt();
    ret += (20.0 * (6.0 * lng * PI).sin() + 20.0 * (2.0 * lng * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lat * PI).sin() + 40.0 * (lat / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (lat / 12.0 * PI).sin() + 320.0 * (lat * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

#[inline]
fn transform_lng(lng: f64, lat: f64) -> f64 {
    let mut ret = 300.0
        + lng
        + 2.0 * lat
        + 0.1 * lng * lng
        + 0.1 * lng * lat
        + 0.1 * lng.abs().sqrt();
    ret += (20.0 * (6.0 * lng * PI).sin() + 20.0 * (2.0 * lng * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lng * PI).sin() + 40.0 * (lng / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (lng / 12.0 * PI).sin() + 300.0 * (lng / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// The GCJ-02 offset applied to `(lng, lat)`, without the bounding check.
#[inline(always)]
fn shift(lng: f64, lat: f64) -> (f64, f64) {
    let d_lat = transform_lat(lng - 105.0, lat - 35.0);
    let d_lng = transform_lng(lng - 105.0, lat - 35.0);

    let rad_lat = lat / 180.0 * PI;
    let magic = rad_lat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    let d_lat = (d_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    let d_lng = (d_lng * 180.0) / (A / sqrt_magic * rad_lat.cos() * PI);

    (lng + d_lng, lat + d_lat)
}

/// Returns the GCJ-02 position of the BD-09 position.
///
/// This is not an exact inverse of [`gcj02_to_bd09`],
/// the round trip leaves an error about 1e-6 \[deg\].
///
/// # Example
///
/// ```
/// # use chinacoord::bd09_to_gcj02;
/// #
/// let (lng, lat) = bd09_to_gcj02(116.404, 39.915);
/// assert!((lng - 116.39762729119315).abs() < 1e-9);
/// assert!((lat - 39.90865673957631).abs() < 1e-9);
/// ```
#[must_use]
pub fn bd09_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    let x = lng - 0.0065;
    let y = lat - 0.006;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    (z * theta.cos(), z * theta.sin())
}

/// Returns the BD-09 position of the GCJ-02 position.
///
/// # Example
///
/// ```
/// # use chinacoord::gcj02_to_bd09;
/// #
/// let (lng, lat) = gcj02_to_bd09(116.404, 39.915);
/// assert!((lng - 116.41036949371029).abs() < 1e-9);
/// assert!((lat - 39.92133699351021).abs() < 1e-9);
/// ```
#[must_use]
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let z = (lng * lng + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lng) + 0.000003 * (lng * X_PI).cos();
    (z * theta.cos() + 0.0065, z * theta.sin() + 0.006)
}

/// Returns the GCJ-02 position of the WGS-84 position.
///
/// The position out of China, 73.66 < `lng` < 135.05 and 3.86 < `lat` < 53.55
/// does not hold, is returned as is.
///
/// # Example
///
/// ```
/// # use chinacoord::wgs84_to_gcj02;
/// #
/// let (lng, lat) = wgs84_to_gcj02(116.404, 39.915);
/// assert!((lng - 116.41024449916938).abs() < 1e-9);
/// assert!((lat - 39.91640428150164).abs() < 1e-9);
///
/// // out of China
/// assert_eq!(wgs84_to_gcj02(139.7671, 35.6812), (139.7671, 35.6812));
/// ```
#[must_use]
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    shift(lng, lat)
}

/// Returns the WGS-84 position of the GCJ-02 position.
///
/// This mirrors the input around the offset evaluated at the input itself,
/// the round trip leaves an error up to about 2e-5 \[deg\] at the major cities,
/// and about 5.5e-5 \[deg\] at worst over a 1-degree grid of the China rectangle.
/// See [`gcj02_to_wgs84_exact`] for the verified one.
///
/// The position out of China is returned as is.
///
/// # Example
///
/// ```
/// # use chinacoord::gcj02_to_wgs84;
/// #
/// let (lng, lat) = gcj02_to_wgs84(116.404, 39.915);
/// assert!((lng - 116.39775550083061).abs() < 1e-9);
/// assert!((lat - 39.91359571849836).abs() < 1e-9);
/// ```
#[must_use]
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    let (mg_lng, mg_lat) = shift(lng, lat);
    (lng * 2.0 - mg_lng, lat * 2.0 - mg_lat)
}

/// Returns the verified WGS-84 position of the GCJ-02 position.
///
/// The error from the exact solution is less than [`MAX_ERROR`],
/// that is, [`wgs84_to_gcj02`] of the result is the input within [`MAX_ERROR`].
///
/// The position out of China is returned as is.
///
/// # Errors
///
/// Returns [`Err`] when the error is still larger than [`MAX_ERROR`]
/// after [`ITERATION`] iterations.
/// The GCJ-02 position just inside the rectangle edge, e.g. 73.66 < `lng` < 73.6629
/// at `lat` 30.0, has no WGS-84 preimage, so it fails.
///
/// # Example
///
/// ```
/// # use chinacoord::*;
/// #
/// let (lng, lat) = gcj02_to_wgs84_exact(116.404, 39.915)?;
/// let (x, y) = wgs84_to_gcj02(lng, lat);
/// assert!((x - 116.404).abs() < chinacoord::trans::MAX_ERROR);
/// assert!((y - 39.915).abs() < chinacoord::trans::MAX_ERROR);
/// # Ok::<(), TransformError>(())
/// ```
pub fn gcj02_to_wgs84_exact(lng: f64, lat: f64) -> Result<(f64, f64)> {
    if out_of_china(lng, lat) {
        return Ok((lng, lat));
    }

    // fixed-point iteration from the mirrored approximation
    let (mut w_lng, mut w_lat) = gcj02_to_wgs84(lng, lat);
    for n in 0..ITERATION {
        let (g_lng, g_lat) = wgs84_to_gcj02(w_lng, w_lat);
        let (d_lng, d_lat) = (g_lng - lng, g_lat - lat);

        if d_lng.abs().lt(&MAX_ERROR) && d_lat.abs().lt(&MAX_ERROR) {
            trace!("exact GCJ-02 inverse of ({lng}, {lat}) converged in {n} iteration(s)");
            return Ok((w_lng, w_lat));
        }

        w_lng -= d_lng;
        w_lat -= d_lat;
    }

    debug!("exact GCJ-02 inverse of ({lng}, {lat}) not converged in {ITERATION} iterations");
    Err(TransformError::new_nc(w_lng, w_lat))
}

/// Returns the BD-09 position of the WGS-84 position, via GCJ-02.
///
/// # Example
///
/// ```
/// # use chinacoord::*;
/// #
/// let (lng, lat) = wgs84_to_gcj02(116.404, 39.915);
/// assert_eq!(wgs84_to_bd09(116.404, 39.915), gcj02_to_bd09(lng, lat));
/// ```
#[must_use]
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let (lng, lat) = wgs84_to_gcj02(lng, lat);
    gcj02_to_bd09(lng, lat)
}

/// Returns the WGS-84 position of the BD-09 position, via GCJ-02.
///
/// This uses [`gcj02_to_wgs84`], not [`gcj02_to_wgs84_exact`].
///
/// # Example
///
/// ```
/// # use chinacoord::*;
/// #
/// let (lng, lat) = bd09_to_gcj02(116.404, 39.915);
/// assert_eq!(bd09_to_wgs84(116.404, 39.915), gcj02_to_wgs84(lng, lat));
/// ```
#[must_use]
pub fn bd09_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    let (lng, lat) = bd09_to_gcj02(lng, lat);
    gcj02_to_wgs84(lng, lat)
}

/// Returns the position in `to` of the position `(lng, lat)` in `from`.
///
/// This is the identity when `from` equals to `to`.
///
/// # Example
///
/// ```
/// # use chinacoord::*;
/// #
/// assert_eq!(
///     convert(Crs::Wgs84, Crs::Bd09, 116.404, 39.915),
///     wgs84_to_bd09(116.404, 39.915)
/// );
/// assert_eq!(
///     convert(Crs::Gcj02, Crs::Gcj02, 116.404, 39.915),
///     (116.404, 39.915)
/// );
/// ```
#[must_use]
pub fn convert(from: Crs, to: Crs, lng: f64, lat: f64) -> (f64, f64) {
    trace!("convert ({lng}, {lat}) from {from} to {to}");

    match (from, to) {
        (Crs::Wgs84, Crs::Wgs84) | (Crs::Gcj02, Crs::Gcj02) | (Crs::Bd09, Crs::Bd09) => {
            (lng, lat)
        }
        (Crs::Wgs84, Crs::Gcj02) => wgs84_to_gcj02(lng, lat),
        (Crs::Gcj02, Crs::Wgs84) => gcj02_to_wgs84(lng, lat),
        (Crs::Gcj02, Crs::Bd09) => gcj02_to_bd09(lng, lat),
        (Crs::Bd09, Crs::Gcj02) => bd09_to_gcj02(lng, lat),
        (Crs::Wgs84, Crs::Bd09) => wgs84_to_bd09(lng, lat),
        (Crs::Bd09, Crs::Wgs84) => bd09_to_wgs84(lng, lat),
    }
}

//
// Error
//

/// An error which can be returned on coordinate converting.
///
/// This error is used as the error type for the [`gcj02_to_wgs84_exact`]
/// and [`Coordinate::gcj02_to_wgs84_exact`](crate::Coordinate::gcj02_to_wgs84_exact).
#[derive(Debug, PartialEq)]
pub struct TransformError {
    kind: TransformErrorKind,
}

/// An error kind used by [`TransformError`].
#[derive(Debug, PartialEq)]
pub enum TransformErrorKind {
    /// Error is still higher than [`MAX_ERROR`] even iteration exhausted
    NotConvergent {
        /// The last longitude
        longitude: f64,
        /// The last latitude
        latitude: f64,
    },
}

impl TransformError {
    #[cold]
    const fn new_nc(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: TransformErrorKind::NotConvergent {
                longitude,
                latitude,
            },
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &TransformErrorKind {
        &self.kind
    }
}

impl Error for TransformError {}

impl Display for TransformError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match &self.kind {
            TransformErrorKind::NotConvergent { .. } => write!(
                f,
                "error is still higher than {MAX_ERROR:?} even exhaust {ITERATION:?} iterations"
            ),
        }
    }
}
