use crate::error::{ConversionError, Result};

/// One decoded scalar field, flattened in latitude-major order:
/// `values[i * nlon + j]` is the value at (`latitudes[i]`, `longitudes[j]`).
#[derive(Debug, Clone)]
pub struct VariableLayer {
    pub short_name: String,
    pub values: Vec<f64>,
}

/// A labeled latitude/longitude grid holding one layer per weather variable.
///
/// The axes are shared by all layers; every layer holds exactly
/// `nlat * nlon` values.
#[derive(Debug, Clone)]
pub struct GriddedDataset {
    pub latitudes: Vec<f64>,
    pub longitudes: Vec<f64>,
    pub layers: Vec<VariableLayer>,
}

impl GriddedDataset {
    pub fn new(latitudes: Vec<f64>, longitudes: Vec<f64>) -> Self {
        Self {
            latitudes,
            longitudes,
            layers: Vec::new(),
        }
    }

    pub fn nlat(&self) -> usize {
        self.latitudes.len()
    }

    pub fn nlon(&self) -> usize {
        self.longitudes.len()
    }

    pub fn num_points(&self) -> usize {
        self.nlat() * self.nlon()
    }

    /// Attach a layer, checking it matches the grid shape
    pub fn add_layer(&mut self, short_name: &str, values: Vec<f64>) -> Result<()> {
        if values.len() != self.num_points() {
            return Err(ConversionError::GridShape(format!(
                "Layer '{}' has {} values, grid has {} points",
                short_name,
                values.len(),
                self.num_points()
            )));
        }

        if self.layer(short_name).is_some() {
            return Err(ConversionError::GridShape(format!(
                "Duplicate layer '{}'",
                short_name
            )));
        }

        self.layers.push(VariableLayer {
            short_name: short_name.to_string(),
            values,
        });

        Ok(())
    }

    pub fn layer(&self, short_name: &str) -> Option<&VariableLayer> {
        self.layers.iter().find(|l| l.short_name == short_name)
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
