use chrono::{NaiveDate, Utc};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::ForecastRequest;
use crate::processors::{normalize, tabularize};
use crate::readers::GfsFetcher;
use crate::utils::progress::ProgressReporter;
use crate::writers::ParquetWriter;

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            date,
            cycle,
            forecast_hour,
            output,
            h3_resolution,
        } => {
            let date = match date {
                Some(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")?,
                None => Utc::now().date_naive(),
            };
            let request = ForecastRequest::new(date, cycle, forecast_hour, h3_resolution)?;

            println!(
                "Converting GFS {} cycle {:02}Z f{:03}...",
                request.date, request.cycle, request.forecast_hour
            );

            let progress = ProgressReporter::new_spinner("Fetching GFS data...", false);

            let fetcher = GfsFetcher::new()?;
            let dataset = fetcher.fetch(&request).await?;
            progress.println(&format!(
                "Fetched {} variables on a {}x{} grid",
                dataset.layers.len(),
                dataset.nlat(),
                dataset.nlon()
            ));

            progress.set_message("Normalizing coordinates...");
            let dataset = normalize(dataset);

            progress.set_message(&format!(
                "Adding H3 index at resolution {}...",
                request.h3_resolution
            ));
            let table = tabularize(&dataset, request.h3_resolution)?;

            progress.set_message(&format!("Writing {}...", output.display()));
            let writer = ParquetWriter::new();
            writer.write_table(&table, &request, &output)?;

            progress.finish_with_message(&format!(
                "Wrote {} rows to {}",
                table.num_rows(),
                output.display()
            ));

            let file_info = writer.get_file_info(&output)?;
            println!("\n{}", file_info.summary());
        }

        Commands::Info { file, sample } => {
            println!("Analyzing Parquet file: {}", file.display());

            let writer = ParquetWriter::new();
            let file_info = writer.get_file_info(&file)?;
            println!("\n{}", file_info.summary());

            if sample > 0 {
                println!("\nSample Records (showing up to {} records):", sample);
                let rows = writer.read_sample_rows(&file, sample)?;
                for (i, row) in rows.iter().enumerate() {
                    println!(
                        "{}. ({:.2}, {:.2}) h3={} f{:03}",
                        i + 1,
                        row.latitude,
                        row.longitude,
                        row.h3_index,
                        row.forecast_hour
                    );
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
