use clap::Parser;
use gfs_parquet::cli::{run, Cli};
use gfs_parquet::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
