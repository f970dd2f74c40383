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

use ndarray::Array2;

/// Dense item x user ratings, rows and columns labelled in ascending id order.
/// A `None` cell means the user never rated that item.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionMatrix<U, I> {
    item_ids: Vec<I>,
    user_ids: Vec<U>,
    values: Array2<Option<f64>>,
}

impl<U, I> InteractionMatrix<U, I>
where
    U: Ord,
    I: Ord,
{
    pub(crate) fn from_parts(item_ids: Vec<I>, user_ids: Vec<U>, values: Array2<Option<f64>>) -> Self {
        debug_assert_eq!(values.dim(), (item_ids.len(), user_ids.len()));
        Self {
            item_ids,
            user_ids,
            values,
        }
    }

    /// (items, users)
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn item_ids(&self) -> &[I] {
        &self.item_ids
    }

    pub fn user_ids(&self) -> &[U] {
        &self.user_ids
    }

    pub fn values(&self) -> &Array2<Option<f64>> {
        &self.values
    }

    pub fn row_of(&self, item: &I) -> Option<usize> {
        self.item_ids.binary_search(item).ok()
    }

    pub fn col_of(&self, user: &U) -> Option<usize> {
        self.user_ids.binary_search(user).ok()
    }

    pub fn get(&self, item: &I, user: &U) -> Option<f64> {
        let row = self.row_of(item)?;
        let col = self.col_of(user)?;

        self.values[(row, col)]
    }

    /// Number of observed cells
    pub fn nnz(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn density(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.nnz() as f64 / self.values.len() as f64
        }
    }

    /// 1 where a rating exists, 0 elsewhere
    pub fn observed_mask(&self) -> Array2<u8> {
        self.values.map(|v| u8::from(v.is_some()))
    }

    /// Ratings with every missing cell replaced by `fill`
    pub fn to_dense(&self, fill: f64) -> Array2<f64> {
        self.values.map(|v| v.unwrap_or(fill))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use ndarray::array;

    fn matrix() -> InteractionMatrix<i32, &'static str> {
        InteractionMatrix::from_parts(
            vec!["0001", "0002"],
            vec![3, 7, 9],
            array![[Some(5.), None, Some(1.)], [None, None, Some(10.)]],
        )
    }

    #[test]
    fn lookup_by_label() {
        let m = matrix();

        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row_of(&"0002"), Some(1));
        assert_eq!(m.col_of(&9), Some(2));
        assert_eq!(m.get(&"0001", &3), Some(5.));
        assert_eq!(m.get(&"0001", &7), None);
        assert_eq!(m.get(&"0003", &3), None);
    }

    #[test]
    fn mask_follows_missing_cells() {
        let m = matrix();
        let mask = m.observed_mask();

        assert_eq!(mask, array![[1u8, 0, 1], [0, 0, 1]]);
        assert_eq!(m.nnz(), 3);
        assert_approx_eq!(m.density(), 0.5);
    }

    #[test]
    fn dense_fill() {
        let dense = matrix().to_dense(0.0);
        assert_eq!(dense, array![[5., 0., 1.], [0., 0., 10.]]);
    }

    #[test]
    fn empty_matrix_has_zero_density() {
        let m: InteractionMatrix<i32, String> =
            InteractionMatrix::from_parts(vec![], vec![], Array2::from_elem((0, 0), None));

        assert!(m.is_empty());
        assert_eq!(m.density(), 0.0);
        assert_eq!(m.observed_mask().dim(), (0, 0));
    }
}
