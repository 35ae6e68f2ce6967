// crates/maybe-io/src/main.rs
// maybe - file and HTTP helpers from the command line

use anyhow::Result;
use clap::Parser;
use maybe_io::cli::{self, Cli, Commands};
use maybe_io::config::{parse_bool_env, HttpConfig};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv(); // Load .env from current directory

    let cli = Cli::parse();

    let verbose = cli.verbose || parse_bool_env("MAYBE_VERBOSE").unwrap_or(false);
    let log_level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Read { path } => cli::run_read(&path)?,
        Commands::Write { path, content } => cli::run_write(&path, &content),
        Commands::Append { path, content } => cli::run_append(&path, &content),
        Commands::Remove { path } => cli::run_remove(&path),
        Commands::Get { url, blocking } => {
            cli::run_get(url, blocking, HttpConfig::from_env()).await?;
        }
        Commands::Post {
            url,
            body,
            content_type,
            blocking,
        } => {
            cli::run_post(url, body, content_type, blocking, HttpConfig::from_env()).await?;
        }
        Commands::Demo { end_absent } => {
            let mut stdout = std::io::stdout().lock();
            cli::run_demo(&mut stdout)?;
            if end_absent {
                cli::demo::end_absent();
            }
        }
    }

    Ok(())
}
