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

use crate::matrix::InteractionMatrix;
use config::Aggregation;
use controller::Interaction;
use ndarray::Array2;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy)]
struct Accumulator {
    first: f64,
    last: f64,
    min: f64,
    max: f64,
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn new(score: f64) -> Self {
        Self {
            first: score,
            last: score,
            min: score,
            max: score,
            sum: score,
            count: 1,
        }
    }

    fn push(&mut self, score: f64) {
        self.last = score;
        self.min = self.min.min(score);
        self.max = self.max.max(score);
        self.sum += score;
        self.count += 1;
    }

    fn resolve(&self, aggregation: Aggregation) -> f64 {
        match aggregation {
            Aggregation::Mean => self.sum / self.count as f64,
            Aggregation::First => self.first,
            Aggregation::Last => self.last,
            Aggregation::Min => self.min,
            Aggregation::Max => self.max,
        }
    }
}

/// Result of a pivot, `collapsed` counts the events merged into an already seen cell
#[derive(Debug, Clone)]
pub struct Pivot<U, I> {
    pub matrix: InteractionMatrix<U, I>,
    pub collapsed: usize,
}

/// Reshape rating events into an item x user matrix.
///
/// Rows are the distinct item ids in ascending order, columns the distinct
/// user ids in ascending order. Events sharing a (user, item) pair are
/// combined with `aggregation`, in the order they are given.
pub fn pivot<'r, R, U, I>(
    ratings: impl IntoIterator<Item = &'r R>,
    aggregation: Aggregation,
) -> Pivot<U, I>
where
    R: Interaction<UserId = U, ItemId = I> + 'r,
    U: Ord + Clone,
    I: Ord + Clone,
{
    let mut cells: BTreeMap<(I, U), Accumulator> = BTreeMap::new();
    let mut users = BTreeSet::new();
    let mut collapsed = 0;

    for rating in ratings {
        let key = (rating.item_id().clone(), rating.user_id().clone());
        let score = rating.score();

        match cells.get_mut(&key) {
            Some(acc) => {
                acc.push(score);
                collapsed += 1;
            }

            None => {
                users.insert(key.1.clone());
                cells.insert(key, Accumulator::new(score));
            }
        }
    }

    let user_ids: Vec<U> = users.into_iter().collect();
    let mut item_ids: Vec<I> = cells.keys().map(|(item, _)| item.clone()).collect();
    // Keys are sorted by item first
    item_ids.dedup();

    let mut values = Array2::from_elem((item_ids.len(), user_ids.len()), None);

    // Walk cells in key order, they come grouped by row
    let mut row = 0;
    for ((item, user), acc) in &cells {
        while &item_ids[row] != item {
            row += 1;
        }

        // Every cell user was inserted into `user_ids`
        if let Ok(col) = user_ids.binary_search(user) {
            values[(row, col)] = Some(acc.resolve(aggregation));
        }
    }

    Pivot {
        matrix: InteractionMatrix::from_parts(item_ids, user_ids, values),
        collapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use books::models::ratings::Rating;

    fn duplicated() -> Vec<Rating> {
        vec![
            Rating::new(7, "0001", 5),
            Rating::new(2, "0002", 9),
            Rating::new(7, "0001", 3),
            Rating::new(7, "0001", 6),
        ]
    }

    #[test]
    fn rows_and_columns_are_sorted() {
        let ratings = vec![
            Rating::new(30, "b", 1),
            Rating::new(10, "c", 2),
            Rating::new(20, "a", 3),
            Rating::new(10, "a", 4),
        ];

        let Pivot { matrix, collapsed } = pivot(&ratings, Aggregation::Mean);

        assert_eq!(collapsed, 0);
        assert_eq!(matrix.item_ids(), &["a".to_string(), "b".into(), "c".into()]);
        assert_eq!(matrix.user_ids(), &[10, 20, 30]);
        assert_eq!(matrix.get(&"a".to_string(), &10), Some(4.));
        assert_eq!(matrix.get(&"c".to_string(), &10), Some(2.));
        assert_eq!(matrix.get(&"b".to_string(), &10), None);
        assert_eq!(matrix.nnz(), 4);
    }

    #[test]
    fn duplicates_are_averaged() {
        let ratings = vec![Rating::new(7, "0001", 5), Rating::new(7, "0001", 3)];
        let Pivot { matrix, collapsed } = pivot(&ratings, Aggregation::Mean);

        assert_eq!(collapsed, 1);
        assert_eq!(matrix.shape(), (1, 1));
        assert_approx_eq!(matrix.get(&"0001".to_string(), &7).unwrap(), 4.0);
    }

    #[test]
    fn other_aggregations() {
        let ratings = duplicated();
        let cell = |aggregation| {
            pivot(&ratings, aggregation)
                .matrix
                .get(&"0001".to_string(), &7)
                .unwrap()
        };

        assert_approx_eq!(cell(Aggregation::Mean), 14.0 / 3.0);
        assert_approx_eq!(cell(Aggregation::First), 5.0);
        assert_approx_eq!(cell(Aggregation::Last), 6.0);
        assert_approx_eq!(cell(Aggregation::Min), 3.0);
        assert_approx_eq!(cell(Aggregation::Max), 6.0);
    }

    #[test]
    fn no_events_gives_zero_shape() {
        let ratings: Vec<Rating> = vec![];
        let Pivot { matrix, .. } = pivot(&ratings, Aggregation::Mean);

        assert_eq!(matrix.shape(), (0, 0));
    }
}
