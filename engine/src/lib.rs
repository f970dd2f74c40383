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

pub mod activity;
pub mod error;
pub mod features;
pub mod matrix;
pub mod pivot;

use crate::{
    activity::{retain_active, ActivityCounts},
    error::ErrorKind,
    features::{FeatureSpec, LatentFeatures},
    matrix::InteractionMatrix,
    pivot::{pivot, Pivot},
};
use anyhow::Error;
use config::Config;
use controller::{eid, Controller};
use ndarray::Array2;

pub type Matrix<C> = InteractionMatrix<eid!(<C as Controller>::User), eid!(<C as Controller>::Item)>;

/// Everything a preparation run hands back to the caller
pub struct PreparedData<C: Controller> {
    /// Items without their presentation-only fields
    pub items: Vec<C::ItemSummary>,
    /// The full, unfiltered rating events
    pub ratings: Vec<C::Rating>,
    /// The full, unfiltered users
    pub users: Vec<C::User>,
    /// Y
    pub matrix: Matrix<C>,
    /// R
    pub mask: Array2<u8>,
    pub features: Option<LatentFeatures>,
}

pub struct RatingMatrixBuilder<'a, C>
where
    C: Controller,
{
    controller: &'a C,
    config: &'a Config,
}

impl<'a, C> RatingMatrixBuilder<'a, C>
where
    C: Controller,
    eid!(C::User): Ord + Clone,
    eid!(C::Item): Ord + Clone,
{
    pub fn new(controller: &'a C, config: &'a Config) -> Self {
        Self { controller, config }
    }

    /// Filter out sparse users and items, then pivot what's left into the
    /// item x user matrix. Fails if nothing survives the filter.
    pub fn interaction_matrix(&self, ratings: &[C::Rating]) -> Result<Matrix<C>, Error> {
        let filter = &self.config.filter;
        let aggregation = self.config.matrix.aggregation;
        log::debug!(
            "Filtering with min_user_ratings = {}, min_book_ratings = {}",
            filter.min_user_ratings,
            filter.min_book_ratings
        );

        let counts = ActivityCounts::from_ratings(ratings);
        let users = counts.active_users(filter.min_user_ratings);
        let items = counts.active_items(filter.min_book_ratings);
        log::info!(
            "Retained {} of {} users and {} of {} items",
            users.len(),
            counts.users.len(),
            items.len(),
            counts.items.len()
        );

        let kept = retain_active(ratings, &users, &items);
        log::info!("Retained {} of {} ratings", kept.len(), ratings.len());

        let Pivot { matrix, collapsed } = pivot(kept, aggregation);
        if collapsed > 0 {
            log::warn!(
                "Collapsed {} repeated (user, item) ratings using {:?}",
                collapsed,
                aggregation
            );
        }

        let (rows, cols) = matrix.shape();
        if rows == 0 || cols == 0 {
            return Err(ErrorKind::EmptyMatrix {
                users: cols,
                items: rows,
            }
            .into());
        }

        Ok(matrix)
    }

    pub fn prepare(&self, features: Option<FeatureSpec>) -> Result<PreparedData<C>, Error> {
        let items = self.controller.item_summaries()?;
        let ratings = self.controller.ratings()?;
        let users = self.controller.users()?;

        let matrix = self.interaction_matrix(&ratings)?;
        let mask = matrix.observed_mask();

        let features = match features {
            Some(spec) => {
                let (rows, cols) = matrix.shape();
                Some(LatentFeatures::random(rows, cols, spec)?)
            }
            None => None,
        };

        Ok(PreparedData {
            items,
            ratings,
            users,
            matrix,
            mask,
            features,
        })
    }
}
