//! Newsletter signup bot
//!
//! Main entry point: loads the URL list, resumes from the persisted
//! progress marker, and drives each URL through the browser agent. A
//! whole-process retry wrapper restarts the batch from the marker on any
//! fatal error.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use plugilo::agent::{AgentClient, TaskRunner};
use plugilo::core::Config;
use plugilo::driver::BatchDriver;
use plugilo::source::load_urls;
use plugilo::store::SignupStore;

/// Newsletter signup bot
#[derive(Parser, Debug)]
#[command(name = "plugilo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with newline-delimited target URLs
    #[arg(long, short = 'u')]
    urls_file: Option<PathBuf>,

    /// Base URL of the browser-agent service
    #[arg(long)]
    agent_url: Option<String>,

    /// Run the agent browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Per-task wall-clock budget in seconds
    #[arg(long)]
    task_timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = plugilo::logging::init("newsletter_registrations", args.debug);

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(urls_file) = args.urls_file {
        config.batch.urls_file = urls_file;
    }

    if let Some(agent_url) = args.agent_url {
        config.agent.base_url = agent_url;
    }

    if args.headed {
        config.agent.headless = false;
    }

    if let Some(task_timeout) = args.task_timeout {
        config.agent.task_timeout_secs = task_timeout;
    }

    let max_retries = config.batch.max_retries;
    let retry_delay = config.batch.retry_delay();

    let mut attempt = 0;
    loop {
        match run_batch(&config).await {
            Ok(()) => return Ok(()),
            Err(e) => {
                attempt += 1;
                error!(error = %e, attempt, max_retries, "Execution failed");
                if attempt >= max_retries {
                    error!("Max retries exceeded, exiting");
                    return Err(e.into());
                }
                info!(delay_secs = retry_delay.as_secs(), "Retrying");
                tokio::time::sleep(retry_delay).await;
            }
        }
    }
}

/// One batch attempt, resuming from the persisted progress marker
async fn run_batch(config: &Config) -> plugilo::Result<()> {
    let urls = load_urls(&config.batch.urls_file)?;
    let store = SignupStore::new(&config.store);
    let agent = Arc::new(AgentClient::from_config(&config.agent));
    let runner = TaskRunner::new(
        agent,
        config.agent.task_timeout(),
        config.batch.captcha_skip_threshold,
    );
    let driver = BatchDriver::new(&runner, &store, &urls);

    let start_index = store.start_index();
    info!(
        start_index,
        total = urls.len(),
        "Newsletter signup bot starting"
    );

    let totals = driver.run(start_index).await;
    info!(
        successful = totals.successful,
        processed = totals.processed,
        "Final results"
    );
    Ok(())
}
