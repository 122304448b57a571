use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{DEFAULT_H3_RESOLUTION, DEFAULT_OUTPUT_FILE, VALID_CYCLES};

#[derive(Parser)]
#[command(name = "gfs-parquet")]
#[command(about = "Convert GFS GRIB2 weather data to H3-indexed Parquet")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download a GFS model run and convert it to Parquet
    Convert {
        #[arg(long, help = "Model run date YYYY-MM-DD [default: current UTC date]")]
        date: Option<String>,

        #[arg(long, default_value_t = 0, value_parser = parse_cycle,
              help = "Model cycle hour (0, 6, 12 or 18)")]
        cycle: u8,

        #[arg(long, default_value_t = 0,
              value_parser = clap::value_parser!(u16).range(0..=384),
              help = "Forecast hour 0-384")]
        forecast_hour: u16,

        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE,
              help = "Output Parquet file path")]
        output: PathBuf,

        #[arg(long, default_value_t = DEFAULT_H3_RESOLUTION,
              value_parser = clap::value_parser!(u8).range(0..=15),
              help = "H3 resolution (5 = ~8.5km cells)")]
        h3_resolution: u8,
    },

    /// Display information about a converted Parquet file
    Info {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, default_value = "10")]
        sample: usize,
    },
}

fn parse_cycle(s: &str) -> Result<u8, String> {
    let cycle: u8 = s.parse().map_err(|_| format!("Invalid cycle: {}", s))?;

    if VALID_CYCLES.contains(&cycle) {
        Ok(cycle)
    } else {
        Err(format!("Cycle must be one of {:?}", VALID_CYCLES))
    }
}
