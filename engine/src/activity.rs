// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of rating-matrix.
//
// rating-matrix is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// rating-matrix is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with rating-matrix.  If not, see <http://www.gnu.org/licenses/>.

use controller::Interaction;
use std::collections::{BTreeMap, BTreeSet};

/// Number of rating events authored by each user and received by each item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCounts<U, I> {
    pub users: BTreeMap<U, usize>,
    pub items: BTreeMap<I, usize>,
}

impl<U, I> ActivityCounts<U, I>
where
    U: Ord + Clone,
    I: Ord + Clone,
{
    // Every event counts, repeated pairs and zero scores included
    pub fn from_ratings<'r, R>(ratings: impl IntoIterator<Item = &'r R>) -> Self
    where
        R: Interaction<UserId = U, ItemId = I> + 'r,
    {
        let mut users = BTreeMap::new();
        let mut items = BTreeMap::new();

        for rating in ratings {
            *users.entry(rating.user_id().clone()).or_insert(0) += 1;
            *items.entry(rating.item_id().clone()).or_insert(0) += 1;
        }

        Self { users, items }
    }

    pub fn active_users(&self, min_ratings: usize) -> BTreeSet<U> {
        at_least(&self.users, min_ratings)
    }

    pub fn active_items(&self, min_ratings: usize) -> BTreeSet<I> {
        at_least(&self.items, min_ratings)
    }
}

fn at_least<K: Ord + Clone>(counts: &BTreeMap<K, usize>, min: usize) -> BTreeSet<K> {
    counts
        .iter()
        .filter(|(_, count)| **count >= min)
        .map(|(key, _)| key.clone())
        .collect()
}

/// Events whose user AND item both survived the activity filter
pub fn retain_active<'r, R>(
    ratings: &'r [R],
    users: &BTreeSet<R::UserId>,
    items: &BTreeSet<R::ItemId>,
) -> Vec<&'r R>
where
    R: Interaction,
    R::UserId: Ord,
    R::ItemId: Ord,
{
    ratings
        .iter()
        .filter(|r| users.contains(r.user_id()) && items.contains(r.item_id()))
        .collect()
}
