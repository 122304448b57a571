use crate::error::{ConversionError, Result};
use crate::utils::constants::{MAX_LATITUDE, MIN_LATITUDE};

/// Remap a longitude from the GFS [0, 360) convention to [-180, 180)
///
/// # Examples
/// ```
/// use gfs_parquet::utils::normalize_longitude;
///
/// assert_eq!(normalize_longitude(270.0), -90.0);
/// assert_eq!(normalize_longitude(-90.0), -90.0);
/// ```
pub fn normalize_longitude(lon: f64) -> f64 {
    ((lon + 180.0).rem_euclid(360.0)) - 180.0
}

/// Validate that a latitude lies within [-90, 90]
pub fn validate_latitude(latitude: f64) -> Result<()> {
    if !latitude.is_finite() || !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(ConversionError::InvalidCoordinate(format!(
            "Latitude {} is outside [{}, {}]",
            latitude, MIN_LATITUDE, MAX_LATITUDE
        )));
    }

    Ok(())
}

/// Validate that a longitude is a finite number
pub fn validate_longitude(longitude: f64) -> Result<()> {
    if !longitude.is_finite() {
        return Err(ConversionError::InvalidCoordinate(format!(
            "Longitude {} is not a finite number",
            longitude
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_longitude_range() {
        for lon in [0.0, 45.5, 179.75, 180.0, 270.0, 359.75, 360.0, 720.25, -540.0] {
            let normalized = normalize_longitude(lon);
            assert!(
                (-180.0..180.0).contains(&normalized),
                "{} mapped to {}",
                lon,
                normalized
            );
        }
    }

    #[test]
    fn test_normalize_longitude_values() {
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(90.0), 90.0);
        assert_eq!(normalize_longitude(180.0), -180.0);
        assert_eq!(normalize_longitude(270.0), -90.0);
        assert_eq!(normalize_longitude(359.75), -0.25);
    }

    #[test]
    fn test_normalize_longitude_idempotent() {
        for lon in [0.0, 12.25, 180.0, 270.0, 359.75] {
            let once = normalize_longitude(lon);
            assert_eq!(normalize_longitude(once), once);
        }
    }

    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(90.25).is_err());
        assert!(validate_latitude(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(540.0).is_ok());
        assert!(validate_longitude(f64::INFINITY).is_err());
    }
}
