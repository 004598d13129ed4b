mod config;

use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;
use domain::{
    ports::SatelliteImageFetcher,
    service::{FsImageStore, UnimplementedImageFetcher},
    usecase::{SatelliteImageUseCase, SatelliteImageUseCaseImpl},
};
use http::ReqwestSatelliteImageFetcher;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Args;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    debug!("Parsed args: {:?}", args);

    let saved = match &args.provider_url {
        Some(url_template) => {
            let timeout = Duration::from_secs(args.timeout_secs);
            match ReqwestSatelliteImageFetcher::with_timeout(url_template.as_str(), timeout) {
                Ok(fetcher) => {
                    run(fetcher.fallback_format(args.fallback_format.into()), &args).await
                }
                Err(e) => {
                    error!("HTTP クライアントの初期化に失敗: {}", e);
                    None
                }
            }
        }
        None => run(UnimplementedImageFetcher, &args).await,
    };

    match saved {
        Some(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}

async fn run<F>(fetcher: F, args: &Args) -> Option<PathBuf>
where
    F: SatelliteImageFetcher + Send + Sync,
{
    let usecase = SatelliteImageUseCaseImpl::new(fetcher, FsImageStore);
    usecase
        .fetch(&args.coordinate(), args.sample_id(), &args.output_dir)
        .await
}
