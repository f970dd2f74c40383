// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

/// A single rating event linking a user with an item
pub trait Interaction {
    type UserId;
    type ItemId;

    fn user_id(&self) -> &Self::UserId;
    fn item_id(&self) -> &Self::ItemId;
    fn score(&self) -> f64;
}
