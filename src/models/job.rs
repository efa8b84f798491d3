//
//  travis-client
//  models/job.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Jobs, the individual units of work within a build.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Commit, MinimalBuild, MinimalOwner, MinimalRepository, State};
use crate::api::{Embed, Minimal};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,

    /// Build number and job index, e.g. `"6123.2"`
    #[serde(default)]
    pub number: Option<String>,

    pub state: State,

    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,

    /// Whether a failure of this job still lets the build pass
    #[serde(default)]
    pub allow_failure: bool,

    /// Worker queue the job ran on
    #[serde(default)]
    pub queue: Option<String>,

    #[serde(default)]
    pub build: Option<Embed<MinimalBuild>>,

    #[serde(default)]
    pub repository: Option<Embed<MinimalRepository>>,

    #[serde(default)]
    pub commit: Option<Embed<Commit>>,

    #[serde(default)]
    pub owner: Option<Embed<MinimalOwner>>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalJob {
    pub id: u64,
}

impl Minimal for MinimalJob {
    type Full = Job;
}
