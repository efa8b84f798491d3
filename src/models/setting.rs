//
//  travis-client
//  models/setting.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single repository setting, e.g. `builds_only_with_travis_yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub name: String,
    pub value: SettingValue,
}

/// Settings are either switches or numeric limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Flag(bool),
    Number(i64),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{}", flag),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_flag_and_number() {
        let flag: Setting = serde_json::from_str(
            r#"{"@type":"setting","@href":"/repo/1/setting/build_pushes","name":"build_pushes","value":true}"#,
        )
        .unwrap();
        assert_eq!(flag.value, SettingValue::Flag(true));

        let limit: Setting =
            serde_json::from_str(r#"{"name":"maximum_number_of_builds","value":3}"#).unwrap();
        assert_eq!(limit.value, SettingValue::Number(3));
        assert_eq!(limit.value.to_string(), "3");
    }
}
