//
//  travis-client
//  api/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Endpoint catalog.
//!
//! One method per API path. Each escapes its identifiers once, builds a
//! descriptor and hands it to [`TravisClient::execute`].
//!
//! | Method | Path |
//! |--------|------|
//! | GET | `/owner/{user}/repos` |
//! | GET | `/repos` |
//! | GET | `/active` |
//! | GET | `/build/{id}/jobs` |
//! | GET | `/job/{id}` |
//! | POST | `/job/{id}/restart`, `/job/{id}/cancel` |
//! | POST | `/repo/{id_or_slug}` |
//! | POST | `/repo/{id_or_slug}/activate`, `deactivate`, `star`, `unstar` |
//! | GET | `/builds` |
//! | GET | `/repo/{id_or_slug}/builds` |
//! | GET | `/build/{id}` |
//! | POST | `/build/{id}/restart`, `/build/{id}/cancel` |
//! | GET | `/repo/{id_or_slug}/settings` |

use reqwest::Method;

use super::common::{Page, Result};
use super::{escape_segment, ListOptions, RequestDescriptor, TravisClient};
use crate::models::{Action, Build, Job, MinimalBuild, MinimalJob, Repository, Setting};

impl TravisClient {
    fn get_with(&self, path: String, options: &ListOptions) -> RequestDescriptor {
        self.request_with(path, options.to_query(), Method::GET)
    }

    fn post(&self, path: String) -> RequestDescriptor {
        self.request_with(path, Vec::new(), Method::POST)
    }

    // Repositories

    /// Repositories owned by `user` (a user or organization login).
    pub async fn repositories_for_user(&self, user: &str) -> Result<Page<Repository>> {
        self.repositories_for_user_with(user, &ListOptions::default()).await
    }

    pub async fn repositories_for_user_with(
        &self,
        user: &str,
        options: &ListOptions,
    ) -> Result<Page<Repository>> {
        let path = format!("/owner/{}/repos", escape_segment(user));
        self.execute(&self.get_with(path, options)).await
    }

    /// Repositories the authenticated user has access to.
    pub async fn user_repositories(&self) -> Result<Page<Repository>> {
        self.user_repositories_with(&ListOptions::default()).await
    }

    pub async fn user_repositories_with(&self, options: &ListOptions) -> Result<Page<Repository>> {
        self.execute(&self.get_with("/repos".to_string(), options)).await
    }

    /// Fetches a single repository by id or slug.
    ///
    /// Sent as POST, matching the behaviour this client has always had.
    pub async fn repository(&self, id_or_slug: &str) -> Result<Repository> {
        let path = format!("/repo/{}", escape_segment(id_or_slug));
        self.execute(&self.post(path)).await
    }

    /// Enables builds for a repository.
    pub async fn activate_repository(&self, id_or_slug: &str) -> Result<Repository> {
        self.repository_action(id_or_slug, "activate").await
    }

    /// Disables builds for a repository.
    pub async fn deactivate_repository(&self, id_or_slug: &str) -> Result<Repository> {
        self.repository_action(id_or_slug, "deactivate").await
    }

    pub async fn star_repository(&self, id_or_slug: &str) -> Result<Repository> {
        self.repository_action(id_or_slug, "star").await
    }

    pub async fn unstar_repository(&self, id_or_slug: &str) -> Result<Repository> {
        self.repository_action(id_or_slug, "unstar").await
    }

    async fn repository_action(&self, id_or_slug: &str, action: &str) -> Result<Repository> {
        let path = format!("/repo/{}/{}", escape_segment(id_or_slug), action);
        self.execute(&self.post(path)).await
    }

    // Builds

    /// Builds currently running for the authenticated user.
    pub async fn active_builds(&self) -> Result<Page<Build>> {
        self.execute(&self.request("/active")).await
    }

    /// Builds triggered by the authenticated user.
    pub async fn user_builds(&self) -> Result<Page<Build>> {
        self.user_builds_with(&ListOptions::default()).await
    }

    pub async fn user_builds_with(&self, options: &ListOptions) -> Result<Page<Build>> {
        self.execute(&self.get_with("/builds".to_string(), options)).await
    }

    pub async fn builds_for_repository(&self, id_or_slug: &str) -> Result<Page<Build>> {
        self.builds_for_repository_with(id_or_slug, &ListOptions::default())
            .await
    }

    pub async fn builds_for_repository_with(
        &self,
        id_or_slug: &str,
        options: &ListOptions,
    ) -> Result<Page<Build>> {
        let path = format!("/repo/{}/builds", escape_segment(id_or_slug));
        self.execute(&self.get_with(path, options)).await
    }

    pub async fn build(&self, id: &str) -> Result<Build> {
        let path = format!("/build/{}", escape_segment(id));
        self.execute(&self.request(path)).await
    }

    /// Restarts all jobs of a build.
    pub async fn restart_build(&self, id: &str) -> Result<Action<MinimalBuild>> {
        let path = format!("/build/{}/restart", escape_segment(id));
        self.execute(&self.post(path)).await
    }

    /// Cancels all unfinished jobs of a build.
    pub async fn cancel_build(&self, id: &str) -> Result<Action<MinimalBuild>> {
        let path = format!("/build/{}/cancel", escape_segment(id));
        self.execute(&self.post(path)).await
    }

    // Jobs

    pub async fn jobs_for_build(&self, build_id: &str) -> Result<Page<Job>> {
        let path = format!("/build/{}/jobs", escape_segment(build_id));
        self.execute(&self.request(path)).await
    }

    pub async fn job(&self, id: &str) -> Result<Job> {
        let path = format!("/job/{}", escape_segment(id));
        self.execute(&self.request(path)).await
    }

    pub async fn restart_job(&self, id: &str) -> Result<Action<MinimalJob>> {
        let path = format!("/job/{}/restart", escape_segment(id));
        self.execute(&self.post(path)).await
    }

    pub async fn cancel_job(&self, id: &str) -> Result<Action<MinimalJob>> {
        let path = format!("/job/{}/cancel", escape_segment(id));
        self.execute(&self.post(path)).await
    }

    // Settings

    pub async fn settings_for_repository(&self, id_or_slug: &str) -> Result<Page<Setting>> {
        let path = format!("/repo/{}/settings", escape_segment(id_or_slug));
        self.execute(&self.request(path)).await
    }
}
