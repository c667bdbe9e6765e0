use anyhow::Context;
use idcn_engine::{app_config::Config, Simulation, SimulationClock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "idcn_engine=debug,idcn_order=debug,idcn_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    let sim = Simulation::from_config(&config).context("Failed to build simulation")?;
    tracing::info!(inventory = ?sim.inventory_snapshot(), "Simulation seeded");

    let interval = config.simulation.tick_interval()?;
    let clock = SimulationClock::start(sim.clone(), interval);

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    tracing::info!("Shutdown requested");

    clock.shutdown().await.context("Simulation clock panicked")?;

    let status = sim.status();
    tracing::info!(
        delivered = status.delivered_today,
        in_flight = status.deliveries,
        notifications = status.notifications,
        "Final status"
    );
    Ok(())
}
