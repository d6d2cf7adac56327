//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use trending_core::{DEFAULT_MAX_RESULTS, MOST_POPULAR_CHART, RegionCode};

/// Fetch every page of YouTube trending videos and save them as JSON
#[derive(Parser, Debug)]
#[command(name = "trending")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// ISO 3166-1 alpha-2 region code
    #[arg(short, long, default_value = "ID", value_parser = parse_region)]
    pub region: RegionCode,

    /// Video category ID
    #[arg(short, long, default_value_t = 17)]
    pub category: u32,

    /// Results requested per page
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: u32,

    /// Chart selector
    #[arg(long, default_value = MOST_POPULAR_CHART)]
    pub chart: String,

    /// Output file
    #[arg(short, long, default_value = "trending_videos.json")]
    pub output: PathBuf,

    /// YouTube Data API key (falls back to `.env`)
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_region(value: &str) -> Result<RegionCode, String> {
    RegionCode::new(value).map_err(|e| e.to_string())
}
