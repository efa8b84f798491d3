//
//  travis-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod build;
mod job;
mod repo;

pub use build::BuildCommand;
pub use job::JobCommand;
pub use repo::RepoCommand;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::api::{Host, ListOptions, TravisClient};
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// Travis CLI - Work with Travis CI from the command line
#[derive(Parser, Debug)]
#[command(
    name = "travis",
    version,
    about = "Work with Travis CI from the command line",
    propagate_version = true,
    after_help = "Use 'travis <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Travis deployment: org or com
    #[arg(long, global = true, env = "TRAVIS_HOST")]
    pub host: Option<Host>,

    /// API token
    #[arg(long, global = true, env = "TRAVIS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Send requests to this origin instead of the deployment host
    #[arg(long, global = true, hide = true, env = "TRAVIS_ORIGIN")]
    pub origin: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Builds a client from the flags, falling back to the config file.
    pub fn client(&self) -> Result<TravisClient> {
        let config = Config::load()?;
        self.client_with(config)
    }

    pub fn client_with(&self, config: Config) -> Result<TravisClient> {
        let token = self
            .token
            .clone()
            .or(config.token)
            .filter(|t| !t.trim().is_empty())
            .context("No API token. Pass --token or set TRAVIS_TOKEN")?;

        let mut client_config = config.client;
        if let Some(host) = self.host {
            client_config.host = host;
        }
        if let Some(origin) = &self.origin {
            client_config.origin = Some(origin.clone());
        }

        Ok(TravisClient::with_config(token, &client_config)?)
    }

    pub fn writer(&self) -> OutputWriter {
        if self.json {
            OutputWriter::new(OutputFormat::Json)
        } else {
            OutputWriter::default()
        }
    }
}

/// Paging flags shared by list commands
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Maximum number of results
    #[arg(long, short = 'L')]
    pub limit: Option<u32>,

    /// Number of results to skip
    #[arg(long)]
    pub offset: Option<u32>,

    /// Sort order, e.g. id:desc
    #[arg(long)]
    pub sort_by: Option<String>,
}

impl ListArgs {
    pub fn options(&self) -> ListOptions {
        ListOptions {
            limit: self.limit,
            offset: self.offset,
            sort_by: self.sort_by.clone(),
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List repositories
    Repos {
        /// List repositories of this user or organization instead of your own
        #[arg(long)]
        owner: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Manage a repository
    #[command(visible_alias = "r")]
    Repo(RepoCommand),

    /// List builds
    Builds {
        /// Only builds of this repository (id or owner/name)
        #[arg(long, short = 'R')]
        repo: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List running builds
    Active,

    /// View and control a build
    Build(BuildCommand),

    /// View and control a job
    Job(JobCommand),

    /// Print version information
    Version,
}

impl Commands {
    pub async fn run(self, global: &GlobalOptions) -> Result<()> {
        let writer = global.writer();
        match self {
            Self::Repos { owner, list } => {
                let client = global.client()?;
                let repos = match owner {
                    Some(owner) => client.repositories_for_user_with(&owner, &list.options()).await?,
                    None => client.user_repositories_with(&list.options()).await?,
                };
                writer.write_list(&repos.items)
            }
            Self::Repo(cmd) => cmd.run(global).await,
            Self::Builds { repo, list } => {
                let client = global.client()?;
                let builds = match repo {
                    Some(repo) => client.builds_for_repository_with(&repo, &list.options()).await?,
                    None => client.user_builds_with(&list.options()).await?,
                };
                writer.write_list(&builds.items)
            }
            Self::Active => {
                let builds = global.client()?.active_builds().await?;
                writer.write_list(&builds.items)
            }
            Self::Build(cmd) => cmd.run(global).await,
            Self::Job(cmd) => cmd.run(global).await,
            Self::Version => {
                println!("travis version {}", crate::VERSION);
                Ok(())
            }
        }
    }
}
