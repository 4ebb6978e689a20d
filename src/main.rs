use clap::Parser;
use redlens::cli::{Args, is_config_operation};
use redlens::commands::{
    handle_config_update_command, handle_home, handle_list_config_command, handle_play,
    handle_schedule, load_fixtures, validate_args,
};
use redlens::config::Config;
use redlens::error::AppError;
use redlens::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if is_config_operation(&args) {
        if args.list_config {
            return handle_list_config_command().await;
        }
        return handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    let store = load_fixtures(&config, args.offline).await?;

    if args.play.is_some() {
        handle_play(&args, &store).await
    } else if args.schedule {
        handle_schedule(&args, &store).await
    } else {
        handle_home(&args, &store).await
    }
}
