//
//  travis-client
//  models/repository.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repositories, their owners and branches.

use serde::{Deserialize, Serialize};

use super::MinimalBuild;
use crate::api::{Embed, Minimal};

/// A repository as returned by `/repo/{id}` and `/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,

    /// Repository name without the owner, e.g. `travis-web`
    pub name: String,

    /// Owner and name, e.g. `travis-ci/travis-web`
    pub slug: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub github_id: Option<u64>,

    #[serde(default)]
    pub github_language: Option<String>,

    /// Whether Travis builds this repository
    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub owner: Option<Embed<MinimalOwner>>,

    #[serde(default)]
    pub default_branch: Option<Embed<MinimalBranch>>,

    /// Only present when the request was authenticated
    #[serde(default)]
    pub starred: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalRepository {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

impl Minimal for MinimalRepository {
    type Full = Repository;
}

/// A user or organization owning repositories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: u64,
    pub login: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub github_id: Option<u64>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub education: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalOwner {
    pub id: u64,
    pub login: String,
}

impl Minimal for MinimalOwner {
    type Full = Owner;
}

/// A branch of a repository together with its most recent build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,

    #[serde(default)]
    pub repository: Option<Embed<MinimalRepository>>,

    #[serde(default)]
    pub default_branch: bool,

    #[serde(default)]
    pub exists_on_github: bool,

    #[serde(default)]
    pub last_build: Option<Embed<MinimalBuild>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalBranch {
    pub name: String,
}

impl Minimal for MinimalBranch {
    type Full = Branch;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Link;

    #[test]
    fn test_decode_standard_repository() {
        let json = r#"{
            "@type": "repository",
            "@href": "/repo/891",
            "@representation": "standard",
            "id": 891,
            "name": "travis-web",
            "slug": "travis-ci/travis-web",
            "description": "The Ember web client for Travis CI",
            "github_id": 1234,
            "github_language": "JavaScript",
            "active": true,
            "private": false,
            "owner": {"@type": "organization", "id": 87, "login": "travis-ci", "@href": "/org/87"},
            "default_branch": {"@type": "branch", "@href": "/repo/891/branch/master", "@representation": "minimal", "name": "master"},
            "starred": false
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.slug, "travis-ci/travis-web");
        assert!(repo.active);

        let owner = repo.owner.unwrap();
        assert_eq!(owner.kind, "organization");
        assert_eq!(owner.login, "travis-ci");

        let branch = repo.default_branch.unwrap();
        assert_eq!(branch.link(), Link::Linked("/repo/891/branch/master"));
        assert_eq!(branch.object.name, "master");
    }

    #[test]
    fn test_minimal_repository_ignores_extra_fields() {
        let json = r#"{"id": 1, "name": "r", "slug": "o/r", "active": true}"#;
        let repo: MinimalRepository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.slug, "o/r");
    }

    #[test]
    fn test_repository_requires_slug() {
        let json = r#"{"id": 1, "name": "r"}"#;
        assert!(serde_json::from_str::<Repository>(json).is_err());
    }
}
