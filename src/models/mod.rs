pub mod grid;
pub mod request;
pub mod table;
pub mod variables;

pub use grid::{GriddedDataset, VariableLayer};
pub use request::ForecastRequest;
pub use table::{WeatherColumn, WeatherTable};
pub use variables::{rename_column, SurfaceVariable, COLUMN_RENAMES};
