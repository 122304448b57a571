/// NOMADS GRIB filter endpoint for the 0.25 degree GFS product
pub const NOMADS_FILTER_URL: &str = "https://nomads.ncep.noaa.gov/cgi-bin/filter_gfs_0p25.pl";

/// GFS product identifier used in file names
pub const GFS_PRODUCT: &str = "pgrb2.0p25";

/// Model cycles published per day
pub const VALID_CYCLES: [u8; 4] = [0, 6, 12, 18];

/// Processing defaults
pub const DEFAULT_H3_RESOLUTION: u8 = 5;
pub const DEFAULT_OUTPUT_FILE: &str = "weather.parquet";
pub const DEFAULT_ROW_GROUP_SIZE: usize = 10000;

/// Coordinate bounds
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Parquet compression options
pub const COMPRESSION_SNAPPY: &str = "snappy";
pub const COMPRESSION_GZIP: &str = "gzip";
pub const COMPRESSION_LZ4: &str = "lz4";
pub const COMPRESSION_ZSTD: &str = "zstd";
pub const COMPRESSION_NONE: &str = "none";
