//! # chinacoord
//!
//! Coordinate converter between WGS-84, GCJ-02 and BD-09,
//! the coordinate reference systems of Chinese maps.
//!
//! WGS-84、GCJ-02（火星坐标）与 BD-09（百度坐标）的相互转换。
//!
//! ```
//! use chinacoord::{Coordinate, Crs};
//!
//! // Makes the origin of conversion, longitude first
//! let origin = Coordinate::new(116.404, 39.915);
//!
//! // WGS-84 to GCJ-02
//! let gcj02 = origin.wgs84_to_gcj02();
//! // Prints Coordinate { longitude: 116.41024449916938, latitude: 39.91640428150164 }
//! println!("{gcj02:?}");
//!
//! // GCJ-02 to BD-09
//! let bd09 = gcj02.gcj02_to_bd09();
//! assert_eq!(bd09, origin.convert(Crs::Wgs84, Crs::Bd09));
//!
//! // And backward, it is not exact
//! let result = bd09.bd09_to_gcj02().gcj02_to_wgs84();
//! assert!((result.longitude - origin.longitude).abs() < 1e-4);
//! assert!((result.latitude - origin.latitude).abs() < 1e-4);
//!
//! // Verified backward from GCJ-02
//! let exact = gcj02.gcj02_to_wgs84_exact()?;
//! assert!((exact.longitude - origin.longitude).abs() < 1e-9);
//! assert!((exact.latitude - origin.latitude).abs() < 1e-9);
//! # Ok::<(), chinacoord::TransformError>(())
//! ```
//!
//! The free functions work on `(longitude, latitude)` pairs;
//!
//! ```
//! use chinacoord::{bd09_to_gcj02, gcj02_to_bd09, gcj02_to_wgs84, wgs84_to_gcj02};
//!
//! let (lng, lat) = wgs84_to_gcj02(116.404, 39.915);
//! let (lng, lat) = gcj02_to_bd09(lng, lat);
//! let (lng, lat) = bd09_to_gcj02(lng, lat);
//! let (lng, lat) = gcj02_to_wgs84(lng, lat);
//! # assert!((lng - 116.404).abs() < 1e-4);
//! # assert!((lat - 39.915).abs() < 1e-4);
//! ```
//!
//! Features:
//!
//! - Pure and total functions, no state and no I/O
//! - Supports WGS-84 ⇔ GCJ-02 ⇔ BD-09 and their composition
//! - Supports verified backward conversion from GCJ-02 to WGS-84
//! - The position out of China is not shifted between WGS-84 and GCJ-02,
//!   where "out of China" is the out of the rectangle
//!   73.66 < longitude < 135.05 and 3.86 < latitude < 53.55
//! - It depends on [`log`][log] crate, and [`serde`][serde] crate only if `serde` feature on
//!
//! [log]: https://crates.io/crates/log
//! [serde]: https://crates.io/crates/serde
//!
//! # Serialization and Deserialization
//!
//! It supports (de)serialization by [`serde` crate](https://crates.io/crates/serde)
//! for [`Coordinate`] and [`Crs`] only if the feature `serde` is enabled.
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn main() -> serde_json::Result<()> {
//! use chinacoord::{Coordinate, Crs};
//!
//! let coord = Coordinate::new(116.404, 39.915);
//!
//! let json = serde_json::to_string(&coord)?;
//! assert_eq!(json, r#"{"longitude":116.404,"latitude":39.915}"#);
//! assert_eq!(serde_json::from_str::<Coordinate>(&json)?, coord);
//!
//! let json = serde_json::to_string(&Crs::Gcj02)?;
//! assert_eq!(json, r#""GCJ02""#);
//! assert_eq!(serde_json::from_str::<Crs>(&json)?, Crs::Gcj02);
//! # Ok(())}
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```

#[doc(inline)]
pub use coord::{Coordinate, CoordinateError};
#[doc(inline)]
pub use crs::{Crs, ParseCrsError};
#[doc(inline)]
pub use trans::{
    bd09_to_gcj02, bd09_to_wgs84, convert, gcj02_to_bd09, gcj02_to_wgs84, gcj02_to_wgs84_exact,
    wgs84_to_bd09, wgs84_to_gcj02, TransformError,
};

pub mod coord;
pub mod crs;
pub mod trans;
