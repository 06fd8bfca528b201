use std::process::ExitCode;
use std::sync::Arc;

use dotenvy::dotenv;

use heavyweight::heavyweight_config::Settings;
use heavyweight::logging::init_tracing;
use heavyweight::server;

fn main() -> ExitCode {
    dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => Arc::new(settings),
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(settings.debug);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .max_blocking_threads(settings.blocking_threads)
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(server::run(settings)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Server exited with an error");
            ExitCode::FAILURE
        }
    }
}
