use snake_trail::runtime::run_headless;
use snake_trail::SimConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let config = SimConfig::from_env()?;
  tracing::info!(
    tick_ms = config.tick_ms,
    seed = ?config.seed,
    points_per_segment = config.body.points_per_segment,
    "starting headless snake"
  );

  let snapshot = run_headless(config).await?;
  tracing::info!(
    score = snapshot.score,
    segments = snapshot.total_segments,
    ticks = snapshot.tick,
    "run finished"
  );
  println!("{}", serde_json::to_string_pretty(&snapshot)?);
  Ok(())
}
