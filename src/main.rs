use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use linguate::cli::commands::{settings, translate};
use linguate::cli::{Args, Command};
use linguate::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so translated output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Settings {
            set_source,
            set_target,
            set_threads,
            set_chunk_size,
        }) => {
            settings::run_settings(settings::SettingsOptions {
                set_source,
                set_target,
                set_threads,
                set_chunk_size,
            })?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                from: args.from,
                to: args.to,
                threads: args.threads,
                chunk_size: args.chunk_size,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
