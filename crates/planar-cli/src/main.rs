use std::process::ExitCode;

use clap::Parser;

mod args;
mod run;

use args::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run::run(&args) {
        Ok(written) => {
            log::info!(
                "Generated {} and {}",
                written.header.display(),
                written.source.display()
            );
            if let Some(preview) = written.preview {
                log::info!("Preview written to {}", preview.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
