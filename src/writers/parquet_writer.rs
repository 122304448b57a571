use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::*;
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, GzipLevel, ZstdLevel};
use parquet::file::properties::WriterProperties;

use crate::error::{ConversionError, Result};
use crate::models::{ForecastRequest, WeatherTable};
use crate::utils::constants::{
    COMPRESSION_GZIP, COMPRESSION_LZ4, COMPRESSION_NONE, COMPRESSION_SNAPPY, COMPRESSION_ZSTD,
    DEFAULT_ROW_GROUP_SIZE,
};

/// Writes a weather table to a compressed Parquet file.
///
/// The Arrow schema is built from the columns actually present in the table,
/// so variables dropped upstream never appear as null-filled placeholders.
/// The run/forecast metadata columns are computed here from the request.
pub struct ParquetWriter {
    compression: Compression,
    row_group_size: usize,
}

impl ParquetWriter {
    pub fn new() -> Self {
        Self {
            compression: Compression::ZSTD(ZstdLevel::default()),
            row_group_size: DEFAULT_ROW_GROUP_SIZE,
        }
    }

    pub fn with_compression(mut self, compression: &str) -> Result<Self> {
        self.compression = match compression.to_lowercase().as_str() {
            COMPRESSION_SNAPPY => Compression::SNAPPY,
            COMPRESSION_GZIP => Compression::GZIP(GzipLevel::default()),
            COMPRESSION_LZ4 => Compression::LZ4,
            COMPRESSION_ZSTD => Compression::ZSTD(ZstdLevel::default()),
            COMPRESSION_NONE => Compression::UNCOMPRESSED,
            _ => {
                return Err(ConversionError::Config(format!(
                    "Unsupported compression: {}",
                    compression
                )))
            }
        };
        Ok(self)
    }

    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Write the table plus run/forecast metadata columns to `path`.
    ///
    /// Creates or overwrites the file; a failure mid-write may leave a
    /// truncated file behind.
    pub fn write_table(
        &self,
        table: &WeatherTable,
        request: &ForecastRequest,
        path: &Path,
    ) -> Result<()> {
        let schema = self.create_schema(table);
        let batch = self.table_to_batch(table, request, schema.clone())?;

        let file = File::create(path)?;
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;
        writer.write(&batch)?;
        writer.close()?;

        Ok(())
    }

    /// Arrow schema for the table's columns plus the metadata columns
    fn create_schema(&self, table: &WeatherTable) -> Arc<Schema> {
        let mut fields = vec![
            Field::new("latitude", DataType::Float64, false),
            Field::new("longitude", DataType::Float64, false),
        ];

        for column in &table.columns {
            fields.push(Field::new(column.name.as_str(), DataType::Float64, false));
        }

        fields.push(Field::new("h3_index", DataType::Utf8, false));
        fields.push(Field::new(
            "forecast_time",
            DataType::Timestamp(TimeUnit::Millisecond, None),
            false,
        ));
        fields.push(Field::new(
            "run_time",
            DataType::Timestamp(TimeUnit::Millisecond, None),
            false,
        ));
        fields.push(Field::new("forecast_hour", DataType::Int32, false));

        Arc::new(Schema::new(fields))
    }

    fn table_to_batch(
        &self,
        table: &WeatherTable,
        request: &ForecastRequest,
        schema: Arc<Schema>,
    ) -> Result<RecordBatch> {
        let num_rows = table.num_rows();

        let run_ms = request.run_time().timestamp_millis();
        let valid_ms = request.valid_time().timestamp_millis();

        let mut arrays: Vec<ArrayRef> = vec![
            Arc::new(Float64Array::from(table.latitude.clone())),
            Arc::new(Float64Array::from(table.longitude.clone())),
        ];

        for column in &table.columns {
            arrays.push(Arc::new(Float64Array::from(column.values.clone())));
        }

        arrays.push(Arc::new(StringArray::from(table.h3_index.clone())));
        arrays.push(Arc::new(TimestampMillisecondArray::from(vec![
            valid_ms;
            num_rows
        ])));
        arrays.push(Arc::new(TimestampMillisecondArray::from(vec![
            run_ms;
            num_rows
        ])));
        arrays.push(Arc::new(Int32Array::from(vec![
            request.forecast_hour as i32;
            num_rows
        ])));

        let batch = RecordBatch::try_new(schema, arrays)?;

        Ok(batch)
    }

    /// Get file statistics
    pub fn get_file_info(&self, path: &Path) -> Result<ParquetFileInfo> {
        use parquet::file::reader::{FileReader, SerializedFileReader};

        let file = File::open(path)?;
        let reader = SerializedFileReader::new(file)?;
        let metadata = reader.metadata();

        let file_metadata = metadata.file_metadata();
        let row_groups = metadata.num_row_groups();
        let total_rows = file_metadata.num_rows();
        let file_size = std::fs::metadata(path)?.len();

        let columns: Vec<String> = file_metadata
            .schema_descr()
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        Ok(ParquetFileInfo {
            total_rows,
            row_groups: row_groups as i32,
            columns,
            file_size,
            compression: self.compression,
        })
    }

    /// Read up to `limit` sample rows back from a written file
    pub fn read_sample_rows(&self, path: &Path, limit: usize) -> Result<Vec<SampleRow>> {
        use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

        let file = File::open(path)?;
        let parquet_reader = ParquetRecordBatchReaderBuilder::try_new(file)?
            .with_batch_size(limit.max(1).min(8192))
            .build()?;

        let mut rows = Vec::new();

        for batch_result in parquet_reader {
            let batch = batch_result?;
            let schema = batch.schema();

            let latitudes = column_as::<Float64Array>(&batch, schema.index_of("latitude")?)?;
            let longitudes = column_as::<Float64Array>(&batch, schema.index_of("longitude")?)?;
            let h3_indexes = column_as::<StringArray>(&batch, schema.index_of("h3_index")?)?;
            let forecast_hours =
                column_as::<Int32Array>(&batch, schema.index_of("forecast_hour")?)?;

            for i in 0..batch.num_rows() {
                rows.push(SampleRow {
                    latitude: latitudes.value(i),
                    longitude: longitudes.value(i),
                    h3_index: h3_indexes.value(i).to_string(),
                    forecast_hour: forecast_hours.value(i),
                });

                if rows.len() >= limit {
                    return Ok(rows);
                }
            }
        }

        Ok(rows)
    }
}

fn column_as<'a, T: 'static>(batch: &'a RecordBatch, index: usize) -> Result<&'a T> {
    batch
        .column(index)
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| ConversionError::Config(format!("Unexpected type for column {}", index)))
}

impl Default for ParquetWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct SampleRow {
    pub latitude: f64,
    pub longitude: f64,
    pub h3_index: String,
    pub forecast_hour: i32,
}

#[derive(Debug)]
pub struct ParquetFileInfo {
    pub total_rows: i64,
    pub row_groups: i32,
    pub columns: Vec<String>,
    pub file_size: u64,
    pub compression: Compression,
}

impl ParquetFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "Parquet File Summary:\n\
            - Total rows: {}\n\
            - Row groups: {}\n\
            - Columns: {}\n\
            - File size: {:.2} MB\n\
            - Compression: {:?}",
            self.total_rows,
            self.row_groups,
            self.columns.join(", "),
            self.file_size as f64 / 1_048_576.0, // Convert to MB
            self.compression,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherColumn;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn request() -> ForecastRequest {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        ForecastRequest::new(date, 12, 6, 5).unwrap()
    }

    fn table_1x2() -> WeatherTable {
        WeatherTable {
            latitude: vec![51.5, 51.5],
            longitude: vec![-0.25, 0.0],
            columns: vec![WeatherColumn {
                name: "temperature_k".to_string(),
                values: vec![283.0, 284.0],
            }],
            h3_index: vec!["85195da3fffffff".to_string(), "85194e67fffffff".to_string()],
        }
    }

    #[test]
    fn test_write_and_read_back() -> Result<()> {
        let writer = ParquetWriter::new();
        let temp_file = NamedTempFile::new().unwrap();

        writer.write_table(&table_1x2(), &request(), temp_file.path())?;

        let info = writer.get_file_info(temp_file.path())?;
        assert_eq!(info.total_rows, 2);
        assert!(info.columns.contains(&"temperature_k".to_string()));
        assert!(info.columns.contains(&"h3_index".to_string()));

        let rows = writer.read_sample_rows(temp_file.path(), 10)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].latitude, 51.5);
        assert_eq!(rows[0].h3_index, "85195da3fffffff");
        assert_eq!(rows[0].forecast_hour, 6);

        Ok(())
    }

    #[test]
    fn test_absent_variables_produce_no_columns() -> Result<()> {
        let writer = ParquetWriter::new();
        let temp_file = NamedTempFile::new().unwrap();

        writer.write_table(&table_1x2(), &request(), temp_file.path())?;

        let info = writer.get_file_info(temp_file.path())?;
        assert!(!info.columns.contains(&"wind_gust_ms".to_string()));

        Ok(())
    }

    #[test]
    fn test_different_compressions() -> Result<()> {
        let compressions = ["snappy", "gzip", "lz4", "zstd", "none"];

        for compression in &compressions {
            let writer = ParquetWriter::new().with_compression(compression)?;
            let temp_file = NamedTempFile::new().unwrap();

            let result = writer.write_table(&table_1x2(), &request(), temp_file.path());
            assert!(result.is_ok(), "Failed with compression: {}", compression);
        }

        Ok(())
    }

    #[test]
    fn test_unsupported_compression_rejected() {
        assert!(ParquetWriter::new().with_compression("brotli9000").is_err());
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let writer = ParquetWriter::new();
        let result = writer.write_table(
            &table_1x2(),
            &request(),
            Path::new("/nonexistent-dir/weather.parquet"),
        );

        assert!(matches!(result, Err(ConversionError::Io(_))));
    }
}
