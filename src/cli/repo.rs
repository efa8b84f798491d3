//
//  travis-client
//  cli/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;

/// Manage a repository
#[derive(Args, Debug)]
pub struct RepoCommand {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoSubcommand {
    /// View repository details
    View(RepoArgs),

    /// Enable builds for a repository
    Activate(RepoArgs),

    /// Disable builds for a repository
    Deactivate(RepoArgs),

    /// Star a repository
    Star(RepoArgs),

    /// Unstar a repository
    Unstar(RepoArgs),

    /// List repository settings
    Settings(RepoArgs),
}

#[derive(Args, Debug)]
pub struct RepoArgs {
    /// Repository id or slug (owner/name)
    pub repo: String,
}

impl RepoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        match &self.command {
            RepoSubcommand::View(args) => writer.write(&client.repository(&args.repo).await?),
            RepoSubcommand::Activate(args) => {
                writer.write(&client.activate_repository(&args.repo).await?)
            }
            RepoSubcommand::Deactivate(args) => {
                writer.write(&client.deactivate_repository(&args.repo).await?)
            }
            RepoSubcommand::Star(args) => writer.write(&client.star_repository(&args.repo).await?),
            RepoSubcommand::Unstar(args) => {
                writer.write(&client.unstar_repository(&args.repo).await?)
            }
            RepoSubcommand::Settings(args) => {
                let settings = client.settings_for_repository(&args.repo).await?;
                writer.write_list(&settings.items)
            }
        }
    }
}
