// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use common_macros::hash_map;
use controller::Entity;
use serde::{de, Deserialize, Deserializer};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    #[serde(rename = "User-ID")]
    pub id: i32,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "Age", default, deserialize_with = "nullable_age")]
    pub age: Option<f64>,
}

// The users file spells a missing age in several ways
fn nullable_age<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("NULL") | Some("\\N") | Some("NaN") | Some("nan") => Ok(None),
        Some(age) => age.parse().map(Some).map_err(de::Error::custom),
    }
}

impl Entity for User {
    type Id = i32;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_data(&self) -> HashMap<String, String> {
        let mut map = hash_map! {
            "location".into() => self.location.clone()
        };

        if let Some(age) = &self.age {
            map.insert("age".into(), age.to_string());
        }

        map
    }
}
