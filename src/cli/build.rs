//
//  travis-client
//  cli/build.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;

/// View and control a build
#[derive(Args, Debug)]
pub struct BuildCommand {
    #[command(subcommand)]
    pub command: BuildSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BuildSubcommand {
    /// View build details
    View(BuildArgs),

    /// List the jobs of a build
    Jobs(BuildArgs),

    /// Restart a build
    Restart(BuildArgs),

    /// Cancel a build
    Cancel(BuildArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Build id
    pub id: String,
}

impl BuildCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        match &self.command {
            BuildSubcommand::View(args) => writer.write(&client.build(&args.id).await?),
            BuildSubcommand::Jobs(args) => {
                let jobs = client.jobs_for_build(&args.id).await?;
                writer.write_list(&jobs.items)
            }
            BuildSubcommand::Restart(args) => writer.write(&client.restart_build(&args.id).await?),
            BuildSubcommand::Cancel(args) => writer.write(&client.cancel_build(&args.id).await?),
        }
    }
}
