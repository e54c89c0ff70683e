use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "linguate")]
#[command(about = "Selection translation tool with sentence-aware chunking and caching")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Source language code, or 'auto' to detect
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Worker pool size for parallel chunk translation (1-10)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Maximum characters per translation chunk (100-5000)
    #[arg(long = "chunk-size")]
    pub chunk_size: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes
    Languages,
    /// Show or update persisted settings
    Settings {
        /// Persist a new source language code
        #[arg(long = "set-source")]
        set_source: Option<String>,

        /// Persist a new target language code
        #[arg(long = "set-target")]
        set_target: Option<String>,

        /// Persist a new worker pool size (1-10)
        #[arg(long = "set-threads")]
        set_threads: Option<usize>,

        /// Persist a new chunk character limit (100-5000)
        #[arg(long = "set-chunk-size")]
        set_chunk_size: Option<usize>,
    },
}
