//! CLI entry point for blog-readtime

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-readtime")]
#[command(version)]
#[command(about = "Attach precomputed reading times to static blog posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts with their reading times, newest first
    #[command(alias = "ls")]
    List {
        /// Print the enriched records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report sources with missing reading times or colliding titles
    Check,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_readtime=debug,info"
    } else {
        "blog_readtime=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { json } => {
            let blog = blog_readtime::Blog::new(&base_dir)?;
            blog_readtime::commands::list::run(&blog, json).await?;
        }

        Commands::Check => {
            let blog = blog_readtime::Blog::new(&base_dir)?;
            blog_readtime::commands::check::run(&blog)?;
        }

        Commands::Version => {
            println!("blog-readtime version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
