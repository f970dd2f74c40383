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

use crate::error::ErrorKind;
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Requested shape of the latent features, pass a seed for reproducible draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub dimension: usize,
    pub seed: Option<u64>,
}

impl FeatureSpec {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            seed: None,
        }
    }

    pub fn seeded(dimension: usize, seed: u64) -> Self {
        Self {
            dimension,
            seed: Some(seed),
        }
    }
}

/// Randomly initialised item and user factors, not learned
#[derive(Debug, Clone, PartialEq)]
pub struct LatentFeatures {
    pub items: Array2<f64>,
    pub users: Array2<f64>,
}

impl LatentFeatures {
    pub fn random(num_items: usize, num_users: usize, spec: FeatureSpec) -> Result<Self, ErrorKind> {
        if spec.dimension == 0 {
            return Err(ErrorKind::ZeroFeatureDimension);
        }

        let mut rng = match spec.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Items first, so a seed always maps to the same item block
        let items = standard_normal(&mut rng, num_items, spec.dimension);
        let users = standard_normal(&mut rng, num_users, spec.dimension);

        Ok(Self { items, users })
    }

    pub fn dimension(&self) -> usize {
        self.items.ncols()
    }
}

fn standard_normal<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_simple_fn((rows, cols), || rng.sample::<f64, _>(StandardNormal))
}
