use anyhow::Context;

use singleton_demo::{DemoConfig, run_config_demo, run_logger_demo};

fn main() -> anyhow::Result<()> {
    singleton_observability::init();

    let config = DemoConfig::from_env().context("invalid demo configuration")?;
    tracing::info!(
        workers = config.workers,
        init_delay_ms = config.init_delay.as_millis() as u64,
        "starting demo"
    );

    let logger = run_logger_demo(&config)?;
    println!("All {} workers finished.", logger.workers);
    println!("Are logger1 and logger2 the same? {}", logger.same_instance);
    println!("Logger 1 init time: {}", logger.first_created_at.format("%H:%M:%S%.3f"));
    println!("Logger 2 init time: {}", logger.second_created_at.format("%H:%M:%S%.3f"));
    println!("Messages recorded: {}", logger.entries);

    let cfg = run_config_demo();
    println!("App name: {}", cfg.app_name);
    println!("DB host before update: {}", display(&cfg.db_host_before));
    println!("DB host after update via second reference: {}", display(&cfg.db_host_after));
    println!("Are cfg1 and cfg2 the same? {}", cfg.same_instance);
    println!(
        "All settings: {}",
        serde_json::to_string(&cfg.settings).context("failed to serialize settings")?
    );

    Ok(())
}

fn display(value: &Option<serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "<unset>".to_string(),
    }
}
