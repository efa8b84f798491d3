//
//  travis-client
//  models/build.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Builds and commits.
//!
//! A build is triggered by a push, pull request, cron or API request and
//! consists of one or more jobs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MinimalBranch, MinimalJob, MinimalOwner, MinimalRepository, State};
use crate::api::{Embed, Minimal};

/// A build as returned by `/build/{id}`, `/builds` and `/repo/{slug}/builds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub id: u64,

    /// Incremental number within the repository, e.g. `"1234"`
    pub number: String,

    pub state: State,

    /// Wall clock duration in seconds
    #[serde(default)]
    pub duration: Option<u64>,

    /// `push`, `pull_request`, `cron` or `api`
    #[serde(default)]
    pub event_type: Option<String>,

    #[serde(default)]
    pub previous_state: Option<State>,

    #[serde(default)]
    pub pull_request_title: Option<String>,

    #[serde(default)]
    pub pull_request_number: Option<u64>,

    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub repository: Option<Embed<MinimalRepository>>,

    #[serde(default)]
    pub branch: Option<Embed<MinimalBranch>>,

    #[serde(default)]
    pub commit: Option<Embed<Commit>>,

    #[serde(default)]
    pub jobs: Vec<Embed<MinimalJob>>,

    #[serde(default)]
    pub created_by: Option<Embed<MinimalOwner>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Build {
    /// True when the build was triggered by a pull request.
    pub fn is_pull_request(&self) -> bool {
        self.event_type.as_deref() == Some("pull_request")
    }
}

/// The minimal build representation, also returned by restart and cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalBuild {
    pub id: u64,

    #[serde(default)]
    pub number: Option<String>,

    #[serde(default)]
    pub state: Option<State>,

    #[serde(default)]
    pub duration: Option<u64>,

    #[serde(default)]
    pub event_type: Option<String>,

    #[serde(default)]
    pub previous_state: Option<State>,

    #[serde(default)]
    pub pull_request_title: Option<String>,

    #[serde(default)]
    pub pull_request_number: Option<u64>,

    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

impl Minimal for MinimalBuild {
    type Full = Build;
}

/// The commit a build ran against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub id: u64,
    pub sha: String,

    /// Git ref, e.g. `refs/heads/master`
    #[serde(default, rename = "ref")]
    pub git_ref: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub compare_url: Option<String>,

    #[serde(default)]
    pub committed_at: Option<DateTime<Utc>>,
}

impl Commit {
    /// First seven characters of the sha.
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Link;

    const BUILD: &str = r#"{
        "@type": "build",
        "@href": "/build/86601346",
        "@representation": "standard",
        "id": 86601346,
        "number": "6123",
        "state": "passed",
        "duration": 412,
        "event_type": "push",
        "previous_state": "failed",
        "pull_request_title": null,
        "pull_request_number": null,
        "started_at": "2018-04-14T10:21:18Z",
        "finished_at": "2018-04-14T10:28:10Z",
        "private": false,
        "repository": {"@type": "repository", "@href": "/repo/891", "@representation": "minimal", "id": 891, "name": "travis-web", "slug": "travis-ci/travis-web"},
        "branch": {"@type": "branch", "@href": "/repo/891/branch/master", "@representation": "minimal", "name": "master"},
        "commit": {"@type": "commit", "@representation": "minimal", "id": 24658, "sha": "a3f2c1e7b9d0", "ref": "refs/heads/master", "message": "Fix flaky spec", "compare_url": "https://github.com/travis-ci/travis-web/compare/1...2", "committed_at": "2018-04-14T10:20:00Z"},
        "jobs": [
            {"@type": "job", "@href": "/job/1", "@representation": "minimal", "id": 1},
            {"@type": "job", "@href": "/job/2", "@representation": "minimal", "id": 2}
        ],
        "created_by": {"@type": "user", "@href": "/user/5", "@representation": "minimal", "id": 5, "login": "iainsmith"},
        "updated_at": "2018-04-14T10:28:11.123Z"
    }"#;

    #[test]
    fn test_decode_standard_build() {
        let build: Build = serde_json::from_str(BUILD).unwrap();
        assert_eq!(build.id, 86601346);
        assert_eq!(build.number, "6123");
        assert_eq!(build.state, State::Passed);
        assert_eq!(build.previous_state, Some(State::Failed));
        assert!(!build.is_pull_request());
        assert_eq!(build.jobs.len(), 2);
        assert_eq!(build.jobs[1].link(), Link::Linked("/job/2"));

        let commit = build.commit.unwrap();
        assert_eq!(commit.link(), Link::Unlinked);
        assert_eq!(commit.git_ref.as_deref(), Some("refs/heads/master"));
        assert_eq!(commit.short_sha(), "a3f2c1e");
    }

    #[test]
    fn test_build_with_required_fields_missing_fails() {
        assert!(serde_json::from_str::<Build>(r#"{"unexpected":1}"#).is_err());
    }

    #[test]
    fn test_minimal_build_only_needs_id() {
        let build: MinimalBuild = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(build.id, 7);
        assert!(build.state.is_none());
    }

    #[test]
    fn test_short_sha_on_short_input() {
        let commit = Commit {
            id: 1,
            sha: "abc".to_string(),
            git_ref: None,
            message: None,
            compare_url: None,
            committed_at: None,
        };
        assert_eq!(commit.short_sha(), "abc");
    }
}
