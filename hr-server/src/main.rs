use hr_server::utils::logger::{cleanup_old_logs, init_logger_with_file};
use hr_server::{Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_dir = config.log_dir();
    init_logger_with_file(&config.log_level, config.log_json, Some(&log_dir))?;

    match cleanup_old_logs(&log_dir, config.log_retention_days) {
        Ok(0) => {}
        Ok(removed) => tracing::info!(removed, "Old log files removed"),
        Err(e) => tracing::warn!(error = %e, "Log cleanup failed"),
    }

    tracing::info!(
        port = config.http_port,
        environment = %config.environment,
        rating_policy = %config.policies.rating,
        orphan_policy = %config.policies.orphan,
        "Starting HR records server"
    );

    Server::new(config).run().await?;
    Ok(())
}
