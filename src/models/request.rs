use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ConversionError, Result};
use crate::utils::constants::VALID_CYCLES;

/// Parameters identifying a single GFS model run and forecast step.
///
/// Immutable once constructed; fully determines the fetch and the output
/// metadata columns.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForecastRequest {
    pub date: NaiveDate,

    pub cycle: u8,

    #[validate(range(max = 384))]
    pub forecast_hour: u16,

    #[validate(range(max = 15))]
    pub h3_resolution: u8,
}

impl ForecastRequest {
    pub fn new(date: NaiveDate, cycle: u8, forecast_hour: u16, h3_resolution: u8) -> Result<Self> {
        let request = Self {
            date,
            cycle,
            forecast_hour,
            h3_resolution,
        };

        request.validate()?;

        if !VALID_CYCLES.contains(&cycle) {
            return Err(ConversionError::Config(format!(
                "Cycle {} is not a GFS cycle (expected one of {:?})",
                cycle, VALID_CYCLES
            )));
        }

        Ok(request)
    }

    /// Nominal model run time: midnight UTC on the request date plus the cycle hour
    pub fn run_time(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.date.and_time(NaiveTime::MIN))
            + Duration::hours(self.cycle as i64)
    }

    /// Time the requested forecast step is valid for
    pub fn valid_time(&self) -> DateTime<Utc> {
        self.run_time() + Duration::hours(self.forecast_hour as i64)
    }

    /// Date formatted as YYYYMMDD for NOMADS directory names
    pub fn date_compact(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(cycle: u8, forecast_hour: u16) -> Result<ForecastRequest> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        ForecastRequest::new(date, cycle, forecast_hour, 5)
    }

    #[test]
    fn test_valid_request() {
        let req = request(12, 6).unwrap();
        assert_eq!(req.date_compact(), "20240115");
    }

    #[test]
    fn test_invalid_cycle_rejected() {
        assert!(request(3, 0).is_err());
        assert!(request(19, 0).is_err());
    }

    #[test]
    fn test_forecast_hour_bounds() {
        assert!(request(0, 384).is_ok());
        assert!(request(0, 385).is_err());
    }

    #[test]
    fn test_h3_resolution_bounds() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert!(ForecastRequest::new(date, 0, 0, 15).is_ok());
        assert!(ForecastRequest::new(date, 0, 0, 16).is_err());
    }

    #[test]
    fn test_time_arithmetic() {
        let req = request(12, 24).unwrap();

        let run_time = req.run_time();
        let valid_time = req.valid_time();

        assert_eq!(run_time.to_rfc3339(), "2024-01-15T12:00:00+00:00");
        assert_eq!(valid_time - run_time, Duration::hours(24));
        assert_eq!(
            run_time - Utc.from_utc_datetime(&req.date.and_hms_opt(0, 0, 0).unwrap()),
            Duration::hours(12)
        );
    }
}
