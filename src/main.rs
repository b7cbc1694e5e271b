use anyhow::Result;
use flappy_grid::{Settings, app};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();
    let settings = Settings::from_env();
    let outcome = app::run(&settings)?;
    info!(score = outcome.ticks, reason = ?outcome.reason, "session finished");
    if !settings.headless {
        println!("Score: {}", outcome.ticks);
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
