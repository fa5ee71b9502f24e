use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use num_traits::Zero;

/// A dense square matrix stored in row-major order, indexed by `(row, column)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    order: usize,
    data: Vec<T>,
}

impl<T: Copy + Zero> Matrix<T> {
    pub fn zeros(order: usize) -> Self {
        Self {
            order,
            data: vec![T::zero(); order * order],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Zero::is_zero)
    }
}

impl<T> Matrix<T> {
    /// Number of rows, which is also the number of columns.
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.order..(row + 1) * self.order]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.order).map(move |row| self.row(row))
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = &T> + '_ {
        self.data.iter().skip(column).step_by(self.order.max(1))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        debug_assert!(row < self.order && column < self.order);
        &self.data[row * self.order + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        debug_assert!(row < self.order && column < self.order);
        &mut self.data[row * self.order + column]
    }
}
