/// A named column of per-row variable values
#[derive(Debug, Clone)]
pub struct WeatherColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// The flattened output table: one row per grid point.
///
/// Column-oriented to match the Parquet writer. All vectors have the same
/// length; variable columns appear only for variables present in the source.
#[derive(Debug, Clone, Default)]
pub struct WeatherTable {
    pub latitude: Vec<f64>,
    pub longitude: Vec<f64>,
    pub columns: Vec<WeatherColumn>,
    pub h3_index: Vec<String>,
}

impl WeatherTable {
    pub fn num_rows(&self) -> usize {
        self.latitude.len()
    }

    pub fn column(&self, name: &str) -> Option<&WeatherColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
