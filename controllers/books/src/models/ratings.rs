// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use controller::Interaction;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rating {
    #[serde(rename = "User-ID")]
    pub user_id: i32,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(rename = "Book-Rating")]
    pub score: i32,
}

impl Rating {
    pub fn new(user_id: i32, isbn: &str, score: i32) -> Self {
        Self {
            user_id,
            isbn: isbn.into(),
            score,
        }
    }
}

impl Interaction for Rating {
    type UserId = i32;
    type ItemId = String;

    fn user_id(&self) -> &Self::UserId {
        &self.user_id
    }

    fn item_id(&self) -> &Self::ItemId {
        &self.isbn
    }

    fn score(&self) -> f64 {
        f64::from(self.score)
    }
}
