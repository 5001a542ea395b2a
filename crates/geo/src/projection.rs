//! WGS-84 to S-JTSK / Krovak East North (EPSG:5514) projection.
//!
//! The transformation runs in four steps:
//! 1. WGS-84 geodetic coordinates to geocentric cartesian
//! 2. Seven-parameter Helmert shift onto the Bessel 1841 ellipsoid
//!    (inverse of the published S-JTSK to WGS-84 position-vector set)
//! 3. Cartesian back to Bessel geodetic coordinates
//! 4. Krovak oblique conformal conic forward projection (EPSG method 9819),
//!    with the southing/westing axes negated to east/north
//!
//! Derived projection constants are computed once in [`KrovakProjection::new`];
//! the forward transform itself is a pure function of its input.

use std::f64::consts::FRAC_PI_4;

use crate::error::{GeoError, Result};
use crate::{GeoCoordinate, PlanarPoint};

// Bessel 1841 ellipsoid (S-JTSK datum)
const BESSEL_A: f64 = 6_377_397.155;
const BESSEL_INV_F: f64 = 299.152_812_8;

// WGS-84 ellipsoid
const WGS84_A: f64 = 6_378_137.0;
const WGS84_INV_F: f64 = 298.257_223_563;

// Published S-JTSK -> WGS-84 Helmert parameters (position-vector
// convention); applied inverted here. Accuracy is about one metre.
const HELMERT_TX_M: f64 = 570.8;
const HELMERT_TY_M: f64 = 85.7;
const HELMERT_TZ_M: f64 = 462.8;
const HELMERT_RX_ARCSEC: f64 = 4.998;
const HELMERT_RY_ARCSEC: f64 = 1.587;
const HELMERT_RZ_ARCSEC: f64 = 5.261;
const HELMERT_SCALE_PPM: f64 = 3.56;

// Krovak parameters for S-JTSK (EPSG method 9819)
const CENTER_LAT_DEG: f64 = 49.5;
const CONE_AXIS_COLAT_DEG: f64 = 30.0 + 17.0 / 60.0 + 17.3031 / 3600.0;
const PSEUDO_PARALLEL_LAT_DEG: f64 = 78.5;
const PSEUDO_PARALLEL_SCALE: f64 = 0.9999;
// 42 deg 30 min east of Ferro, expressed east of Greenwich
const ORIGIN_LON_DEG: f64 = 24.0 + 50.0 / 60.0;

/// Projects WGS-84 geographic coordinates into EPSG:5514.
///
/// Construct once per run and pass by reference wherever address
/// coordinates need projecting; `forward` is stateless.
#[derive(Debug, Clone)]
pub struct KrovakProjection {
    /// Bessel first eccentricity
    e: f64,
    /// Conformal sphere exponent B
    b: f64,
    /// Conformal latitude scaling term
    t0: f64,
    /// Cone constant (sine of the pseudo standard parallel)
    n: f64,
    /// Radius factor: r0 * tan(pi/4 + phi_p/2)^n
    rho_factor: f64,
    sin_alpha: f64,
    cos_alpha: f64,
}

impl KrovakProjection {
    /// Derives the projection constants for the S-JTSK parameter set.
    #[must_use]
    pub fn new() -> Self {
        let f = 1.0 / BESSEL_INV_F;
        let e2 = 2.0 * f - f * f;
        let e = e2.sqrt();

        let phi_c = CENTER_LAT_DEG.to_radians();
        let phi_p = PSEUDO_PARALLEL_LAT_DEG.to_radians();
        let alpha = CONE_AXIS_COLAT_DEG.to_radians();

        let a_sphere = BESSEL_A * (1.0 - e2).sqrt() / (1.0 - e2 * phi_c.sin().powi(2));
        let b = (1.0 + e2 * phi_c.cos().powi(4) / (1.0 - e2)).sqrt();
        let gamma0 = (phi_c.sin() / b).asin();
        let t0 = (FRAC_PI_4 + gamma0 / 2.0).tan()
            * ((1.0 + e * phi_c.sin()) / (1.0 - e * phi_c.sin())).powf(e * b / 2.0)
            / (FRAC_PI_4 + phi_c / 2.0).tan().powf(b);
        let n = phi_p.sin();
        let r0 = PSEUDO_PARALLEL_SCALE * a_sphere / phi_p.tan();

        Self {
            e,
            b,
            t0,
            n,
            rho_factor: r0 * (FRAC_PI_4 + phi_p / 2.0).tan().powf(n),
            sin_alpha: alpha.sin(),
            cos_alpha: alpha.cos(),
        }
    }

    /// Projects a WGS-84 coordinate into EPSG:5514 metres.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::OutOfDomain`] when the input lies outside the
    /// valid geographic range or the projection produces no finite result.
    pub fn forward(&self, coord: &GeoCoordinate) -> Result<PlanarPoint> {
        if !coord.is_valid() {
            return Err(GeoError::OutOfDomain {
                longitude: coord.longitude,
                latitude: coord.latitude,
            });
        }

        let (lat, lon) = wgs84_to_bessel(coord.latitude.to_radians(), coord.longitude.to_radians());
        let point = self
            .krovak_forward(lat, lon)
            // southing/westing to EPSG:5514 east/north
            .map(|(southing, westing)| PlanarPoint::new(-westing, -southing));

        match point {
            Some(p) if p.x.is_finite() && p.y.is_finite() => Ok(p),
            _ => Err(GeoError::OutOfDomain {
                longitude: coord.longitude,
                latitude: coord.latitude,
            }),
        }
    }

    /// Krovak forward projection on Bessel geodetic input (radians).
    ///
    /// Returns `(southing, westing)` in metres, or `None` when an
    /// intermediate angle leaves its domain.
    fn krovak_forward(&self, lat: f64, lon: f64) -> Option<(f64, f64)> {
        let u = 2.0
            * ((self.t0 * (lat / 2.0 + FRAC_PI_4).tan().powf(self.b)
                / ((1.0 + self.e * lat.sin()) / (1.0 - self.e * lat.sin()))
                    .powf(self.e * self.b / 2.0))
                .atan()
                - FRAC_PI_4);
        let v = self.b * (ORIGIN_LON_DEG.to_radians() - lon);

        let sin_t = self.cos_alpha * u.sin() + self.sin_alpha * u.cos() * v.cos();
        if sin_t.abs() > 1.0 {
            return None;
        }
        let t = sin_t.asin();

        let sin_d = u.cos() * v.sin() / t.cos();
        if sin_d.abs() > 1.0 {
            return None;
        }
        let theta = self.n * sin_d.asin();

        let r = self.rho_factor / (t / 2.0 + FRAC_PI_4).tan().powf(self.n);
        Some((r * theta.cos(), r * theta.sin()))
    }
}

impl Default for KrovakProjection {
    fn default() -> Self {
        Self::new()
    }
}

/// Shifts WGS-84 geodetic coordinates (radians) onto the Bessel ellipsoid.
fn wgs84_to_bessel(lat: f64, lon: f64) -> (f64, f64) {
    let f = 1.0 / WGS84_INV_F;
    let e2_wgs = 2.0 * f - f * f;
    let [x, y, z] = geodetic_to_cartesian(lat, lon, WGS84_A, e2_wgs);

    let rx = (HELMERT_RX_ARCSEC / 3600.0).to_radians();
    let ry = (HELMERT_RY_ARCSEC / 3600.0).to_radians();
    let rz = (HELMERT_RZ_ARCSEC / 3600.0).to_radians();
    let scale = 1.0 / (1.0 + HELMERT_SCALE_PPM * 1e-6);

    let xt = x - HELMERT_TX_M;
    let yt = y - HELMERT_TY_M;
    let zt = z - HELMERT_TZ_M;

    // inverse rotation of the position-vector small-angle matrix
    let xb = scale * (xt + rz * yt - ry * zt);
    let yb = scale * (-rz * xt + yt + rx * zt);
    let zb = scale * (ry * xt - rx * yt + zt);

    let bf = 1.0 / BESSEL_INV_F;
    let e2_bessel = 2.0 * bf - bf * bf;
    cartesian_to_geodetic([xb, yb, zb], BESSEL_A, e2_bessel)
}

/// Geodetic (radians) to geocentric cartesian on the given ellipsoid.
fn geodetic_to_cartesian(lat: f64, lon: f64, a: f64, e2: f64) -> [f64; 3] {
    let n = a / (1.0 - e2 * lat.sin().powi(2)).sqrt();
    [
        n * lat.cos() * lon.cos(),
        n * lat.cos() * lon.sin(),
        n * (1.0 - e2) * lat.sin(),
    ]
}

/// Geocentric cartesian to geodetic (radians) on the given ellipsoid.
///
/// Fixed-point iteration on the latitude; converges to well below a
/// millimetre in a handful of rounds for near-surface points.
fn cartesian_to_geodetic([x, y, z]: [f64; 3], a: f64, e2: f64) -> (f64, f64) {
    let lon = y.atan2(x);
    let p = x.hypot(y);
    let mut lat = z.atan2(p * (1.0 - e2));

    for _ in 0..10 {
        let n = a / (1.0 - e2 * lat.sin().powi(2)).sqrt();
        let h = p / lat.cos() - n;
        lat = z.atan2(p * (1.0 - e2 * n / (n + h)));
    }

    (lat, lon)
}
