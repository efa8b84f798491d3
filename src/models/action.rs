//
//  travis-client
//  models/action.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Responses of state-changing endpoints such as restart and cancel.

use serde::{Deserialize, Serialize};

/// Acknowledgement of an accepted state change.
///
/// ```json
/// {"@type": "pending", "build": {"@type": "build", "id": 1}, "state_change": "restart", "resource_type": "build"}
/// ```
///
/// The affected resource is keyed by its type (`build`, `job`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action<T> {
    /// `pending` while the change is queued
    #[serde(rename = "@type")]
    pub kind: String,

    /// Requested change, e.g. `restart` or `cancel`
    pub state_change: String,

    /// Type of the affected resource, e.g. `build`
    pub resource_type: String,

    #[serde(alias = "build", alias = "job", alias = "repository")]
    pub resource: T,
}

impl<T> Action<T> {
    pub fn is_pending(&self) -> bool {
        self.kind == "pending"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MinimalBuild, MinimalJob, State};

    #[test]
    fn test_decode_build_restart() {
        let json = r#"{
            "@type": "pending",
            "build": {"@type": "build", "@href": "/build/9", "@representation": "minimal", "id": 9, "number": "12", "state": "created"},
            "state_change": "restart",
            "resource_type": "build"
        }"#;

        let action: Action<MinimalBuild> = serde_json::from_str(json).unwrap();
        assert!(action.is_pending());
        assert_eq!(action.state_change, "restart");
        assert_eq!(action.resource.id, 9);
        assert_eq!(action.resource.state, Some(State::Created));
    }

    #[test]
    fn test_decode_job_cancel() {
        let json = r#"{"@type":"pending","job":{"id":4},"state_change":"cancel","resource_type":"job"}"#;
        let action: Action<MinimalJob> = serde_json::from_str(json).unwrap();
        assert_eq!(action.resource.id, 4);
        assert_eq!(action.resource_type, "job");
    }
}
