//! Building blocks for a multilayer perceptron assignment: dense matrices,
//! activation functions with their derivatives, and experiment run logging.

pub mod activation;
pub mod experiment;
pub mod matrix;
