//
//  travis-client
//  cli/job.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;

/// View and control a job
#[derive(Args, Debug)]
pub struct JobCommand {
    #[command(subcommand)]
    pub command: JobSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum JobSubcommand {
    /// View job details
    View(JobArgs),

    /// Restart a job
    Restart(JobArgs),

    /// Cancel a job
    Cancel(JobArgs),
}

#[derive(Args, Debug)]
pub struct JobArgs {
    /// Job id
    pub id: String,
}

impl JobCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        match &self.command {
            JobSubcommand::View(args) => writer.write(&client.job(&args.id).await?),
            JobSubcommand::Restart(args) => writer.write(&client.restart_job(&args.id).await?),
            JobSubcommand::Cancel(args) => writer.write(&client.cancel_job(&args.id).await?),
        }
    }
}
