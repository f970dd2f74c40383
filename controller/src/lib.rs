// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod entity;
pub mod error;
pub mod interaction;

#[macro_export]
macro_rules! eid {
    ($e:ty) => {
        <$e as $crate::entity::Entity>::Id
    };
}

use anyhow::Error;

pub use entity::{Entity, ToTable};
pub use interaction::Interaction;

pub type Result<T> = std::result::Result<T, Error>;

/// Read access to the three tables a rating dataset is made of
pub trait Controller {
    type User: Entity;
    type Item: Entity;
    type ItemSummary;
    type Rating: Interaction<UserId = eid!(Self::User), ItemId = eid!(Self::Item)>;

    /// Get all users, untouched
    fn users(&self) -> Result<Vec<Self::User>>;

    /// Get all items, untouched
    fn items(&self) -> Result<Vec<Self::Item>>;

    /// Get all items with presentation-only fields removed
    fn item_summaries(&self) -> Result<Vec<Self::ItemSummary>>;

    /// Get every rating event, duplicates included
    fn ratings(&self) -> Result<Vec<Self::Rating>>;
}
