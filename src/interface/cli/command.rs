//! CLI 명령 파싱 모듈.

use std::ffi::OsString;

use clap::{Parser, Subcommand};

use crate::domain::run::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "pr-typecheck")]
#[command(about = "Type-check changed files of a GitHub pull request and keep its comments in sync")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pull request URL (defaults to the GitHub Actions event payload)
    #[arg(long = "pr", value_name = "URL")]
    pr_url: Option<String>,

    /// Print the plan and comment bodies, do not post
    #[arg(long)]
    dry_run: bool,

    /// Post one review comment per file with diagnostics
    #[arg(long, value_name = "BOOL")]
    include_file_comments: Option<bool>,

    /// Also type-check the base commit and post a comparison table
    #[arg(long, value_name = "BOOL")]
    include_base_comparison: Option<bool>,

    /// Fail the run when errors or warnings increased
    #[arg(long, value_name = "BOOL")]
    fail_on_issue_increase: Option<bool>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config (token redacted) and checker availability
    Config,
}

#[derive(Debug)]
pub enum CliAction {
    InspectConfig,
    Check(RunOptions),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, clap::Error> {
        Self::parse_action_from(std::env::args_os())
    }

    pub fn parse_action_from<I, T>(args: I) -> Result<CliAction, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;

        Ok(match cli.command {
            Some(Commands::Config) => CliAction::InspectConfig,
            None => CliAction::Check(RunOptions {
                pr_url: cli.pr_url,
                dry_run: cli.dry_run,
                include_file_comments: cli.include_file_comments,
                include_base_comparison: cli.include_base_comparison,
                fail_on_issue_increase: cli.fail_on_issue_increase,
            }),
        })
    }
}
