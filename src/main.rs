use std::path::PathBuf;

use clap::Parser;
use relm4::prelude::*;
use snowflake::chart::ChartState;
use snowflake::config;
use snowflake::gui::app::AppModel;
use snowflake::sys::runtime;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not bind the control socket
    #[arg(long)]
    no_server: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.config.is_none()
        && let Err(e) = config::write_default_config()
    {
        log::warn!("Could not write default config: {}", e);
    }

    let config_path = config::resolve_config_path(args.config.as_deref())?;
    let dimensions = config::load_or_default(Some(&config_path)).into_dimensions();
    let state = ChartState::new(dimensions, 520.0, 520.0);

    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx, config_path.clone(), !args.no_server);

    let app = RelmApp::new("org.snowflake.chart");

    app.run::<AppModel>((state, config_path, rx));

    Ok(())
}
