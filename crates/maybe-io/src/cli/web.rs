// crates/maybe-io/src/cli/web.rs
// HTTP subcommands: print the response body or exit non-zero

use std::io::Write;

use anyhow::Result;

use crate::config::HttpConfig;
use crate::error::IoOutcome;
use crate::http;

/// GET `url` with the async client, or the blocking one on a worker thread
pub async fn run_get(url: String, blocking: bool, config: HttpConfig) -> Result<()> {
    let outcome = if blocking {
        tokio::task::spawn_blocking(move || {
            let client = http::create_blocking_client(&config);
            http::get_blocking(&client, &url)
        })
        .await?
    } else {
        let client = http::create_client(&config);
        http::get(&client, &url).await
    };
    print_body(outcome)
}

/// POST `body` to `url`; same client choice as [`run_get`]
pub async fn run_post(
    url: String,
    body: String,
    content_type: String,
    blocking: bool,
    config: HttpConfig,
) -> Result<()> {
    let outcome = if blocking {
        tokio::task::spawn_blocking(move || {
            let client = http::create_blocking_client(&config);
            http::post_blocking(&client, &url, &body, &content_type)
        })
        .await?
    } else {
        let client = http::create_client(&config);
        http::post(&client, &url, &body, &content_type).await
    };
    print_body(outcome)
}

fn print_body(outcome: IoOutcome<String>) -> Result<()> {
    let body = outcome.unwrap_or_panic();
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(body.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
