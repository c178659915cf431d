use crab_demo::transcript::render_output;
use crab_demo::{Config, build, init_logger_with_format};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    // 1. .env + config + logging
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_format(&config.log_level, config.log_json)?;

    tracing::info!(format = ?config.output_format, "🦀 Crab restaurant demo starting...");

    // 2. Build the scenario
    let now = chrono::Local::now().naive_local();
    let world = build(now, config.reservation_offset_days)?;

    // 3. Print the transcript
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render_output(&world, &config)?.as_bytes())?;
    stdout.flush()?;
    drop(stdout);

    if config.prompts_on_exit() {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
    }

    Ok(())
}
