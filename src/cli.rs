use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "table-tennis squeeze sweep finder")]
pub struct Cli {
    /// Stop after this many listing pages (0 disables the cap)
    #[arg(long, global = true)]
    pub max_pages: Option<usize>,

    /// Number of detail pages fetched in parallel
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Defaults with any command-line overrides applied
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::new();
        if let Some(max) = self.max_pages {
            config = config.with_max_pages((max > 0).then_some(max));
        }
        if let Some(concurrency) = self.concurrency {
            config = config.with_detail_concurrency(concurrency);
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Crawl once and print the matches as JSON
    Scan {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
