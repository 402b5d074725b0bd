use crate::config::{self, RunConfig};
use crate::locate::WalkPolicy;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "standup")]
#[command(about = "Reports your recent git history across repositories")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Git author to filter by (defaults to the global user.name)")]
    pub user: Option<String>,

    #[arg(short, long, help = "Directory to scan recursively for repositories (defaults to the home directory)")]
    pub dir: Option<PathBuf>,

    #[arg(short, long, help = "Only include commits after this time, passed to git verbatim (defaults to 24 hours ago)")]
    pub after: Option<String>,

    #[arg(long, help = "Skip unreadable directories instead of aborting the scan")]
    pub skip_errors: bool,

    #[arg(short, long, help = "Enable verbose diagnostics")]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let config = RunConfig {
            user: config::resolve_user(self.user)?,
            root: self.dir.unwrap_or_else(config::default_scan_root),
            after: self.after.unwrap_or_else(config::default_after),
            walk_policy: if self.skip_errors {
                WalkPolicy::Skip
            } else {
                WalkPolicy::Abort
            },
        };

        crate::run::exec(config)
    }
}
