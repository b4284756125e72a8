//! # intrel-linalg
//!
//! Dense linear algebra for integer relation detection.
//!
//! This crate provides a row-major [`DenseMatrix`] generic over its entry
//! type. PSLQ keeps two kinds of matrix side by side: the real-valued
//! lower-trapezoidal `H` and the integer transforms `A` and `B`, so the
//! storage only asks of its entries what each operation needs.
//!
//! ## Operations
//!
//! - Allocation: zeros, identity, from rows
//! - Indexing by `(row, col)`, row slices, column copies, the diagonal
//! - Row and column swaps, scaled row updates, column-pair rotations
//! - Products: matrix-matrix and row-vector-matrix (`vᵀM`)
//! - Squared Frobenius norm

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;

pub use dense_matrix::DenseMatrix;
