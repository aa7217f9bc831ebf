//! Hospital Call Bell - desktop simulator entry point
//!
//! Opens the call screen in an `embedded-graphics-simulator` window. Click
//! the button (or press any key) to raise a nurse call; the placeholder
//! transmitter logs the attempt.
//!
//! Run with: cargo run -p firmware --bin call-bell --features emulator

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use firmware::{
    transmit_task, AppConfig, CallBellApp, CallChannel, ChannelDispatcher, OutcomeChannel,
    SimulatorPanel,
};
use platform::config::{dev_banner, APP_VERSION};
use platform::{PlaceholderTransmitter, TracingLog};

static CALLS: CallChannel = CallChannel::new();
static OUTCOMES: OutcomeChannel = OutcomeChannel::new();

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config);

    tracing::info!(version = APP_VERSION, "{}", dev_banner());
    tracing::info!(
        width = config.display_width,
        height = config.display_height,
        policy = ?config.dismiss_policy,
        "Starting call screen"
    );

    // The transmitter future is not Send, so everything runs on one thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build tokio runtime")?;
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, run(config))
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    tokio::task::spawn_local(transmit_task(
        PlaceholderTransmitter::new(TracingLog),
        CALLS.receiver(),
        OUTCOMES.sender(),
    ));

    let mut app = CallBellApp::new(&config, TracingLog)?;
    let mut panel = SimulatorPanel::new(app.title(), config.display_size(), config.scale);
    let mut input = panel.input();
    let closed = panel.closed();
    let mut dispatcher = ChannelDispatcher::new(CALLS.sender());

    app.run_until(
        &mut panel,
        &mut input,
        &mut dispatcher,
        OUTCOMES.receiver(),
        closed,
    )
    .await?;

    tracing::info!("Exiting");
    Ok(())
}
