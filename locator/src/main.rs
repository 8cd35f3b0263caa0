use anyhow::Context;
use bridge::server::{bind_address, LocatorBridge};
use clap::Parser;
use fix::config::LocatorConfig;
use fix::generator::build_fix;
use log::info;
use pulsecore::dataset::melbourne::MELBOURNE_CENTER;
use pulsecore::dataset::Dataset;
use report::ViewReport;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;

mod bridge;
mod fix;
mod report;

#[derive(Parser)]
#[command(author, version, about = "Device location stand-in for the PulseQuest map")]
struct Args {
    /// Load the locator config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = MELBOURNE_CENTER.lat, allow_negative_numbers = true)]
    latitude: f64,
    #[arg(long, default_value_t = MELBOURNE_CENTER.lng, allow_negative_numbers = true)]
    longitude: f64,
    /// Maximum random error applied to the fix, in metres
    #[arg(long, default_value_t = 0.0)]
    jitter_m: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Answer location requests as if the capability were absent
    #[arg(long, default_value_t = false)]
    unavailable: bool,
    /// Print the markers the map would draw at --zoom
    #[arg(long, default_value_t = false)]
    summary: bool,
    #[arg(long, default_value_t = 14)]
    zoom: i32,
    #[arg(long, default_value_t = false)]
    open_only: bool,
    /// Keep the position endpoint alive until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
    #[arg(long, default_value_t = 9100)]
    port: u16,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        LocatorConfig::load(path)?
    } else {
        LocatorConfig::from_args(
            args.latitude,
            args.longitude,
            args.jitter_m,
            args.seed,
            !args.unavailable,
        )
    };
    let fix = build_fix(&config).context("building position fix")?;
    info!("locator config {:?}", config);

    if args.summary {
        let report = ViewReport::build(Dataset::melbourne(), fix, args.zoom, args.open_only)?;
        print!("{}", report);
    }

    if args.serve {
        let bridge = LocatorBridge::new();
        bridge.publish(fix)?;
        let address = bridge.spawn(bind_address(args.port))?;
        bridge.publish_status(&format!(
            "serving http://{}/position (Ctrl+C to stop)...",
            address
        ));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
