use std::ops::AddAssign;
use std::ops::Index;
use std::ops::IndexMut;

use num::Num;
use rand::distributions::Distribution;
use rand::distributions::Standard;
use rand::Rng;

/// A dense row-major matrix of numeric items.
///
/// This is the array type the activation functions operate on: shapes are
/// preserved through every transformation, and rows are contiguous so the
/// row-wise operations (softmax) can borrow them directly.
#[derive(Debug, Default, Clone)]
pub struct Matrix<T>
where
    T: MatrixItem,
{
    pub cols: usize,
    pub rows: usize,
    pub items: Vec<T>,
}

impl<T> Matrix<T>
where
    T: MatrixItem,
{
    pub fn new<I: Into<usize>>(cols: I, rows: I) -> Self {
        let (cols, rows) = (cols.into(), rows.into());
        let items = vec![T::default(); cols * rows];

        Self { cols, rows, items }
    }

    pub fn with_items<I: Into<usize>, J: Into<Vec<T>>>(items: J, cols: I, rows: I) -> Self {
        let (cols, rows) = (cols.into(), rows.into());
        let items = items.into();

        if items.len() != cols * rows {
            panic!("Item count mismatch while constructing matrix.");
        }

        Self { cols, rows, items }
    }

    /// Apply `f` to every item, producing a matrix of the same shape.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        let items: Vec<T> = self.items.iter().map(|&item| f(item)).collect();

        Self {
            cols: self.cols,
            rows: self.rows,
            items,
        }
    }

    /// Borrow a single row as a contiguous slice.
    pub fn row(&self, row: usize) -> &[T] {
        if row >= self.rows {
            panic!("Index out of bounds while indexing matrix.");
        }

        &self.items[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T> Matrix<T>
where
    T: MatrixItem,
    Standard: Distribution<T>,
{
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for item in self.items.iter_mut() {
            *item = rng.gen();
        }
    }
}

pub trait MatrixItem
where
    Self: std::fmt::Debug + Default + Clone + Copy + Num + AddAssign,
{
}

impl MatrixItem for f32 {}
impl MatrixItem for f64 {}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: MatrixItem,
{
    type Output = T;

    fn index(&self, (cols, rows): (usize, usize)) -> &Self::Output {
        if cols >= self.cols || rows >= self.rows {
            panic!("Index out of bounds while indexing matrix.");
        }

        &self.items[rows * self.cols + cols]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: MatrixItem,
{
    fn index_mut(&mut self, (cols, rows): (usize, usize)) -> &mut Self::Output {
        if cols >= self.cols || rows >= self.rows {
            panic!("Index out of bounds while indexing matrix.");
        }

        &mut self.items[rows * self.cols + cols]
    }
}
