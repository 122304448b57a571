use std::io::Cursor;

use grib::Grib2SubmessageDecoder;
use tracing::{debug, warn};

use crate::error::{ConversionError, Result};
use crate::models::{GriddedDataset, SurfaceVariable};

/// Decode a GRIB2 byte stream into a labeled grid.
///
/// Submessages are matched against the fixed variable set by their parameter
/// codes and first fixed surface; anything else is skipped. The first matched
/// message defines the grid axes, and every later layer must share its shape.
pub fn decode(data: &[u8]) -> Result<GriddedDataset> {
    let grib2 = grib::from_reader(Cursor::new(data.to_vec()))
        .map_err(|e| ConversionError::GribDecode(format!("Failed to parse GRIB: {}", e)))?;

    let mut dataset: Option<GriddedDataset> = None;

    for (_index, submessage) in grib2.iter() {
        let discipline = submessage.indicator().discipline;
        let prod_def = submessage.prod_def();

        let category = prod_def.parameter_category().unwrap_or(0);
        let number = prod_def.parameter_number().unwrap_or(0);
        let (surface_type, surface_value) = prod_def
            .fixed_surfaces()
            .map(|(first, _)| (first.surface_type, first.value() as f64))
            .unwrap_or((0, 0.0));

        let variable =
            match SurfaceVariable::from_grib(discipline, category, number, surface_type, surface_value)
            {
                Some(v) => v,
                None => {
                    debug!(
                        discipline,
                        category, number, surface_type, "skipping unrecognized submessage"
                    );
                    continue;
                }
            };

        let latlons = submessage
            .latlons()
            .map_err(|e| ConversionError::GribDecode(format!("Failed to read grid: {}", e)))?;
        let decoder = Grib2SubmessageDecoder::from(submessage)
            .map_err(|e| ConversionError::GribDecode(format!("Failed to decode values: {}", e)))?;
        let values = decoder
            .dispatch()
            .map_err(|e| ConversionError::GribDecode(format!("Failed to unpack values: {}", e)))?;

        let points: Vec<(f64, f64, f64)> = latlons
            .zip(values)
            .map(|((lat, lon), value)| (lat as f64, lon as f64, value as f64))
            .collect();

        if points.is_empty() {
            warn!(short_name = variable.short_name(), "empty field, skipping");
            continue;
        }

        let layer: Vec<f64> = points.iter().map(|p| p.2).collect();

        match dataset {
            Some(ref mut ds) => ds.add_layer(variable.short_name(), layer)?,
            None => {
                let (latitudes, longitudes) = build_axes(&points)?;
                let mut ds = GriddedDataset::new(latitudes, longitudes);
                ds.add_layer(variable.short_name(), layer)?;
                dataset = Some(ds);
            }
        }
    }

    dataset.ok_or_else(|| {
        ConversionError::GribDecode("GRIB contained no recognized surface variables".to_string())
    })
}

/// Reconstruct the latitude and longitude axes from a flat point sequence.
///
/// GFS lat/lon grids scan with longitude varying fastest, so the longitude
/// axis is the prefix up to the first latitude change and the latitude axis is
/// every nlon-th point.
fn build_axes(points: &[(f64, f64, f64)]) -> Result<(Vec<f64>, Vec<f64>)> {
    let first_lat = points[0].0;
    let nlon = points
        .iter()
        .position(|p| p.0 != first_lat)
        .unwrap_or(points.len());

    if points.len() % nlon != 0 {
        return Err(ConversionError::GridShape(format!(
            "{} points do not tile {} longitudes",
            points.len(),
            nlon
        )));
    }

    let longitudes: Vec<f64> = points[..nlon].iter().map(|p| p.1).collect();
    let latitudes: Vec<f64> = points.iter().step_by(nlon).map(|p| p.0).collect();

    Ok((latitudes, longitudes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_points(lats: &[f64], lons: &[f64]) -> Vec<(f64, f64, f64)> {
        let mut points = Vec::new();
        for (i, lat) in lats.iter().enumerate() {
            for (j, lon) in lons.iter().enumerate() {
                points.push((*lat, *lon, (i * lons.len() + j) as f64));
            }
        }
        points
    }

    #[test]
    fn test_build_axes() {
        let points = grid_points(&[90.0, 89.75, 89.5], &[0.0, 0.25]);

        let (latitudes, longitudes) = build_axes(&points).unwrap();

        assert_eq!(latitudes, vec![90.0, 89.75, 89.5]);
        assert_eq!(longitudes, vec![0.0, 0.25]);
    }

    #[test]
    fn test_build_axes_single_row() {
        let points = grid_points(&[45.0], &[0.0, 0.25, 0.5]);

        let (latitudes, longitudes) = build_axes(&points).unwrap();

        assert_eq!(latitudes, vec![45.0]);
        assert_eq!(longitudes.len(), 3);
    }

    #[test]
    fn test_build_axes_ragged_grid_rejected() {
        let mut points = grid_points(&[90.0, 89.75], &[0.0, 0.25, 0.5]);
        points.pop();

        assert!(build_axes(&points).is_err());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode(b"not a grib file").is_err());
    }
}
