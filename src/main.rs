use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use simple_gpu_info::{
    arg_parser::ArgsOptions,
    errors::{MonitorError, report_error},
    logger,
    monitor::Monitor,
    vendor::nvml::NvmlApi,
};
use tracing::{debug, error};

// A single thread is enough, the only suspension point is the polling interval
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logger::init_logging();

    // Parse the command line arguments
    let args_options = ArgsOptions::parse();

    match run(&args_options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Startup failures were already reported on stderr
            match err.downcast_ref::<MonitorError>() {
                Some(MonitorError::Init(_) | MonitorError::NoAdapters) => {}
                _ => error!("{err}"),
            }

            err.chain().for_each(|e| {
                debug!("Error chain: {}", e);
            });

            ExitCode::FAILURE
        }
    }
}

async fn run(args_options: &ArgsOptions) -> Result<()> {
    let api = match NvmlApi::init() {
        Ok(api) => api,
        Err(e) => {
            report_error(&mut io::stderr(), &e)?;
            return Err(MonitorError::Init(e).into());
        }
    };

    // The session moves into the monitor and is released when it drops
    let monitor = Monitor::start(api, io::stdout(), io::stderr())?;

    monitor
        .run(args_options.interval(), args_options.cycle_limit())
        .await
        .with_context(|| "Failed to print the GPU status")?;

    Ok(())
}
