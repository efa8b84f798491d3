//
//  travis-client
//  models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Domain Models
//!
//! Decode targets for the Travis v3 API. Resources that can be embedded
//! come in pairs: a minimal representation (what appears inside another
//! resource) and a full one. Each minimal type implements
//! [`Minimal`](crate::api::Minimal) pointing at its full counterpart.
//!
//! | Minimal | Full |
//! |---------|------|
//! | [`MinimalRepository`] | [`Repository`] |
//! | [`MinimalBuild`] | [`Build`] |
//! | [`MinimalJob`] | [`Job`] |
//! | [`MinimalBranch`] | [`Branch`] |
//! | [`MinimalOwner`] | [`Owner`] |

mod action;
mod build;
mod job;
mod repository;
mod setting;

pub use action::*;
pub use build::*;
pub use job::*;
pub use repository::*;
pub use setting::*;

use serde::{Deserialize, Serialize};

/// Lifecycle state shared by builds and jobs.
///
/// ```text
/// created -> received -> queued -> started -> passed | failed | errored | canceled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Created,
    Received,
    Queued,
    Started,
    Passed,
    Failed,
    Errored,
    Canceled,
    /// Any state this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl State {
    /// True once the build or job can no longer change state.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            Self::Passed | Self::Failed | Self::Errored | Self::Canceled
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Received => "received",
            Self::Queued => "queued",
            Self::Started => "started",
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Errored => "errored",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_decodes_known_and_unknown() {
        let state: State = serde_json::from_str("\"passed\"").unwrap();
        assert_eq!(state, State::Passed);
        assert!(state.is_finished());

        let state: State = serde_json::from_str("\"booting\"").unwrap();
        assert_eq!(state, State::Unknown);
        assert!(!state.is_finished());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(State::Canceled.to_string(), "canceled");
    }
}
