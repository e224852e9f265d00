mod config;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use mixfeed_lib::mixcloud_api::Client;
use mixfeed_lib::{load_collection, LoaderConfig, PlaylistData, TracklistTable};

use crate::config::Manifest;

#[derive(Parser)]
#[command(name = "mixfeed")]
#[command(about = "Fetch Mixcloud playlist data files for the site build")]
struct Cli {
    /// Playlist manifest (YAML)
    #[arg(long, default_value = "playlists.yml")]
    config: PathBuf,

    /// Directory for the generated data files
    #[arg(long, default_value = "_data/playlists")]
    out_dir: PathBuf,

    /// Delay between page requests in milliseconds
    #[arg(long, default_value = "200")]
    page_delay_ms: u64,

    /// Page ceiling per playlist, against runaway pagination
    #[arg(long, default_value = "100")]
    max_pages: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mixfeed=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let manifest = Manifest::load(&cli.config)?;

    let client = match std::env::var("MIXFEED_BASE_URL") {
        Ok(url) => Client::with_base_url(&url)?,
        Err(_) => Client::new()?,
    };
    let loader_config = LoaderConfig {
        page_delay: Duration::from_millis(cli.page_delay_ms),
        max_pages: cli.max_pages,
        ..LoaderConfig::default()
    };

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;

    let bar = ProgressBar::new(manifest.playlists.len() as u64).with_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}").expect("static template"),
    );

    let mut failed = 0usize;
    for spec in &manifest.playlists {
        bar.set_message(spec.output_name().to_string());

        let result = load_collection(&client, &spec.id, &loader_config).await;
        if result.is_failed() {
            failed += 1;
        }

        let table = match &spec.tracklists {
            Some(path) => TracklistTable::load_optional(path)
                .with_context(|| format!("loading tracklists for {}", spec.id))?,
            None => TracklistTable::default(),
        };

        let data = PlaylistData::from_result(result, &table);
        let out_path = cli.out_dir.join(format!("{}.json", spec.output_name()));
        let json = serde_json::to_string_pretty(&data)?;
        std::fs::write(&out_path, json)
            .with_context(|| format!("writing {}", out_path.display()))?;

        bar.inc(1);
    }
    bar.finish_and_clear();

    // Fetch failures are carried inside the data files; only manifest or
    // filesystem problems fail the build.
    eprintln!(
        "Playlist data complete: {} written, {} with fetch failures",
        manifest.playlists.len(),
        failed
    );
    Ok(())
}
