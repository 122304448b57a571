use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::error::{ConversionError, Result};
use crate::models::{ForecastRequest, GriddedDataset, SurfaceVariable};
use crate::readers::grib_decoder;
use crate::utils::constants::{GFS_PRODUCT, NOMADS_FILTER_URL};

/// Downloads a GFS GRIB2 subset from the NOMADS filter endpoint.
///
/// The filter CGI serves only the requested variable/level pairs out of the
/// full pgrb2 file, so a single blocking GET returns everything the pipeline
/// needs. No retries: an unavailable run is a hard failure.
pub struct GfsFetcher {
    client: Client,
}

impl GfsFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }

    /// Build the NOMADS filter URL for a request.
    ///
    /// Shape: `?dir=/gfs.YYYYMMDD/HH/atmos&file=gfs.tHHz.pgrb2.0p25.fFFF`
    /// plus one `var_X=on` per variable and one `lev_Y=on` per distinct level.
    pub fn build_url(request: &ForecastRequest) -> String {
        let cycle = format!("{:02}", request.cycle);
        let fhour = format!("{:03}", request.forecast_hour);

        let mut url = format!(
            "{}?dir=%2Fgfs.{}%2F{}%2Fatmos&file=gfs.t{}z.{}.f{}",
            NOMADS_FILTER_URL,
            request.date_compact(),
            cycle,
            cycle,
            GFS_PRODUCT,
            fhour
        );

        for variable in SurfaceVariable::ALL {
            url.push_str("&var_");
            url.push_str(variable.nomads_var());
            url.push_str("=on");
        }

        let mut levels: Vec<&str> = Vec::new();
        for variable in SurfaceVariable::ALL {
            let level = variable.nomads_level();
            if !levels.contains(&level) {
                levels.push(level);
            }
        }
        for level in levels {
            url.push_str("&lev_");
            url.push_str(level);
            url.push_str("=on");
        }

        url
    }

    /// Fetch and decode the gridded dataset for a request.
    ///
    /// A 404 from the filter means the run/forecast-hour combination has not
    /// been published and maps to `DataUnavailable`.
    pub async fn fetch(&self, request: &ForecastRequest) -> Result<GriddedDataset> {
        let url = Self::build_url(request);
        debug!(url = %url, "requesting GRIB subset");

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ConversionError::DataUnavailable {
                date: request.date.to_string(),
                cycle: request.cycle,
                forecast_hour: request.forecast_hour,
            });
        }
        let response = response.error_for_status()?;

        let body = response.bytes().await?;
        info!(bytes = body.len(), "downloaded GRIB subset");

        grib_decoder::decode(&body)
    }
}
