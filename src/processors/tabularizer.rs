use h3o::{LatLng, Resolution};

use crate::error::{ConversionError, Result};
use crate::models::{rename_column, GriddedDataset, WeatherColumn, WeatherTable};
use crate::utils::coordinates::{validate_latitude, validate_longitude};

/// Flatten a gridded dataset into one row per grid point and attach an H3
/// cell index at the requested resolution.
///
/// Variable columns are renamed to their stable output names; layers whose
/// short name has no rename entry keep their name. Variables absent from the
/// dataset produce no column at all.
pub fn tabularize(ds: &GriddedDataset, h3_resolution: u8) -> Result<WeatherTable> {
    let resolution = Resolution::try_from(h3_resolution)
        .map_err(|_| ConversionError::InvalidResolution(h3_resolution))?;

    for &lat in &ds.latitudes {
        validate_latitude(lat)?;
    }
    for &lon in &ds.longitudes {
        validate_longitude(lon)?;
    }

    let num_rows = ds.num_points();
    let mut table = WeatherTable {
        latitude: Vec::with_capacity(num_rows),
        longitude: Vec::with_capacity(num_rows),
        columns: ds
            .layers
            .iter()
            .map(|layer| WeatherColumn {
                name: rename_column(&layer.short_name).to_string(),
                values: Vec::with_capacity(num_rows),
            })
            .collect(),
        h3_index: Vec::with_capacity(num_rows),
    };

    let nlon = ds.nlon();
    for (i, &lat) in ds.latitudes.iter().enumerate() {
        for (j, &lon) in ds.longitudes.iter().enumerate() {
            let cell = LatLng::new(lat, lon)
                .map_err(|e| ConversionError::InvalidCoordinate(e.to_string()))?
                .to_cell(resolution);

            table.latitude.push(lat);
            table.longitude.push(lon);
            table.h3_index.push(cell.to_string());

            for (column, layer) in table.columns.iter_mut().zip(&ds.layers) {
                column.values.push(layer.values[i * nlon + j]);
            }
        }
    }

    Ok(table)
}
