//! Command implementations

use std::future::Future;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::{init_logging, Config};
use crate::app::{AppContainer, DownloadRequest, EmbedRequest, TrimRequest};
use crate::cli::args::{CommonArgs, DownloadArgs, EmbedArgs, TrimArgs};
use crate::engine::ConsoleSink;
use crate::error::{MediaKitError, MediaKitResult, EXIT_FAILURE};

/// Execute the download command
pub async fn download(args: DownloadArgs) -> ExitCode {
    let container = match bootstrap(&args.common) {
        Ok(container) => container,
        Err(e) => return report_setup_failure(e),
    };

    let interactor = container.download_interactor();
    let request = DownloadRequest {
        url: args.url,
        output_name: args.output,
    };
    finish(guarded(async move {
        let mut sink = ConsoleSink;
        interactor.execute(request, &mut sink).await
    })
    .await)
}

/// Execute the trim command
pub async fn trim(args: TrimArgs) -> ExitCode {
    let container = match bootstrap(&args.common) {
        Ok(container) => container,
        Err(e) => return report_setup_failure(e),
    };

    let interactor = container.trim_interactor();
    let request = TrimRequest {
        video: args.video,
        from_end_start: args.start,
        from_end_end: args.end,
        output_name: args.output,
    };
    finish(guarded(async move {
        let mut sink = ConsoleSink;
        interactor.execute(request, &mut sink).await
    })
    .await)
}

/// Execute the subtitle embedding command
pub async fn embed(args: EmbedArgs) -> ExitCode {
    let container = match bootstrap(&args.common) {
        Ok(container) => container,
        Err(e) => return report_setup_failure(e),
    };

    let interactor = container.embed_interactor();
    let request = EmbedRequest {
        video: args.video,
        subtitle: args.subtitle,
        output: args.output,
    };
    finish(guarded(async move {
        let mut sink = ConsoleSink;
        interactor.execute(request, &mut sink).await
    })
    .await)
}

/// Load configuration, start logging and wire the adapters
fn bootstrap(common: &CommonArgs) -> Result<AppContainer> {
    let config = Config::load(&common.overrides()).context("Failed to load configuration")?;
    init_logging(&config.logging);
    info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let container = AppContainer::from_config(&config).context("Failed to set up tools")?;
    Ok(container)
}

/// Run an operation on its own task so a panic is reported instead of unwinding out of main
async fn guarded<F>(operation: F) -> MediaKitResult<PathBuf>
where
    F: Future<Output = MediaKitResult<PathBuf>> + Send + 'static,
{
    match tokio::spawn(operation).await {
        Ok(result) => result,
        Err(e) => Err(MediaKitError::Unexpected {
            message: e.to_string(),
        }),
    }
}

fn finish(result: MediaKitResult<PathBuf>) -> ExitCode {
    match result {
        Ok(output) => {
            info!("Finished: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn report_setup_failure(e: anyhow::Error) -> ExitCode {
    eprintln!("Error: {:#}", e);
    let code = e
        .downcast_ref::<MediaKitError>()
        .map(MediaKitError::exit_code)
        .unwrap_or(EXIT_FAILURE);
    ExitCode::from(code)
}
