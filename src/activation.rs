//! Activation functions and their derivatives for multilayer perceptrons.
//!
//! Each nonlinearity exists in two halves: the forward value and its
//! derivative with respect to the pre-activation input. Both halves are
//! selectable from a configuration string through [`get_activation`] and
//! [`get_activation_grad`], or as an [`ActivationVariant`] whose exhaustive
//! matches guarantee at compile time that no variant is missing either half.

use num::Float;
use thiserror::Error;

use crate::matrix::Matrix;
use crate::matrix::MatrixItem;

/// Numerically stable sigmoid, `1 / (1 + exp(-z))`.
///
/// The input is clamped to `[-500, 500]` before exponentiating so that
/// large-magnitude inputs saturate instead of overflowing. The result is
/// always inside the open interval `(0, 1)`.
pub fn sigmoid(z: f64) -> f64 {
    // clip to avoid overflow in exp
    let z = z.clamp(-500.0, 500.0);
    1.0 / (1.0 + (-z).exp())
}

/// Derivative of sigmoid: `s * (1 - s)` where `s = sigmoid(z)`.
///
/// The sigmoid is recomputed here. Callers that already hold `s` can
/// inline the product themselves.
pub fn sigmoid_derivative(z: f64) -> f64 {
    let s = sigmoid(z);
    s * (1.0 - s)
}

/// Hyperbolic tangent, range `(-1, 1)`.
pub fn tanh(z: f64) -> f64 {
    z.tanh()
}

/// Derivative of tanh: `1 - tanh(z)^2`.
pub fn tanh_derivative(z: f64) -> f64 {
    1.0 - z.tanh().powi(2)
}

/// Rectified linear unit, `max(0, z)`.
pub fn relu(z: f64) -> f64 {
    z.max(0.0)
}

/// Derivative of ReLU: `1.0` where `z > 0`, else `0.0`.
///
/// The inequality is strict, so the derivative at exactly zero is `0.0`.
pub fn relu_derivative(z: f64) -> f64 {
    if z > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Row-wise numerically stable softmax over a 2-D matrix.
///
/// Each row's maximum is subtracted before exponentiating, which leaves the
/// result unchanged mathematically but keeps the exponentials finite. Every
/// output row sums to `1.0`.
///
/// Softmax is deliberately not selectable by name: it normalizes across a
/// row rather than element-wise, so it does not share the shape contract of
/// the named activations.
pub fn softmax<T>(z: &Matrix<T>) -> Matrix<T>
where
    T: ActivationItem,
{
    let mut result = Matrix::new(z.cols, z.rows);

    for j in 0..z.rows {
        let row = z.row(j);

        let max = row.iter().fold(f64::NEG_INFINITY, |acc, item| {
            acc.max(item.to_f64().expect("Unable to convert matrix item to primitive float."))
        });

        let exps: Vec<f64> = row
            .iter()
            .map(|item| {
                let item = item.to_f64().expect("Unable to convert matrix item to primitive float.");
                (item - max).exp()
            })
            .collect();

        let total: f64 = exps.iter().sum();

        for (i, exp) in exps.iter().enumerate() {
            result[(i, j)] =
                T::from(exp / total).expect("Unable to convert primitive float to matrix item.");
        }
    }

    result
}

/// Error returned by the name lookups when the name is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown activation: {name}. Choose from {:?}", ActivationVariant::NAMES)]
pub struct UnknownActivation {
    pub name: String,
}

/// Return the forward activation function registered under `name`.
pub fn get_activation(name: &str) -> Result<fn(f64) -> f64, UnknownActivation> {
    use ActivationVariant::*;

    Ok(match ActivationVariant::from_name(name)? {
        Sigmoid => sigmoid as fn(f64) -> f64,
        Tanh => tanh,
        Relu => relu,
    })
}

/// Return the activation derivative registered under `name`.
pub fn get_activation_grad(name: &str) -> Result<fn(f64) -> f64, UnknownActivation> {
    use ActivationVariant::*;

    Ok(match ActivationVariant::from_name(name)? {
        Sigmoid => sigmoid_derivative as fn(f64) -> f64,
        Tanh => tanh_derivative,
        Relu => relu_derivative,
    })
}

pub trait ActivationItem: MatrixItem + Float {}
impl ActivationItem for f32 {}
impl ActivationItem for f64 {}

/// Implement this trait to plug custom activation functions into a network.
pub trait Activation<T: ActivationItem> {
    fn activate(&self, x: T) -> T;
    fn differentiate(&self, x: T) -> T;

    /// Element-wise forward pass over a whole matrix.
    fn apply(&self, z: &Matrix<T>) -> Matrix<T> {
        z.map(|x| self.activate(x))
    }

    /// Element-wise derivative over a whole matrix.
    fn derivative(&self, z: &Matrix<T>) -> Matrix<T> {
        z.map(|x| self.differentiate(x))
    }
}

/// Builtin activation function options, selectable by name.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationVariant {
    #[default]
    Sigmoid,
    Tanh,
    Relu,
}

impl ActivationVariant {
    /// Every name accepted by [`ActivationVariant::from_name`].
    pub const NAMES: [&'static str; 3] = ["sigmoid", "tanh", "relu"];

    /// Look up a variant from its configuration name.
    pub fn from_name(name: &str) -> Result<Self, UnknownActivation> {
        match name {
            "sigmoid" => Ok(Self::Sigmoid),
            "tanh" => Ok(Self::Tanh),
            "relu" => Ok(Self::Relu),
            _ => Err(UnknownActivation {
                name: name.to_owned(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        use ActivationVariant::*;

        match self {
            Sigmoid => "sigmoid",
            Tanh => "tanh",
            Relu => "relu",
        }
    }
}

impl std::str::FromStr for ActivationVariant {
    type Err = UnknownActivation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl<T> Activation<T> for ActivationVariant
where
    T: ActivationItem,
{
    /// Activation function.
    fn activate(&self, x: T) -> T {
        use ActivationVariant::*;

        let x = x.to_f64().expect("Unable to convert matrix item to primitive float.");
        let y = match self {
            &Sigmoid => sigmoid(x),
            &Tanh => tanh(x),
            &Relu => relu(x),
        };

        T::from(y).expect("Unable to convert primitive float to matrix item.")
    }

    /// Derivative function.
    fn differentiate(&self, x: T) -> T {
        use ActivationVariant::*;

        let x = x.to_f64().expect("Unable to convert matrix item to primitive float.");
        let y = match self {
            &Sigmoid => sigmoid_derivative(x),
            &Tanh => tanh_derivative(x),
            &Relu => relu_derivative(x),
        };

        T::from(y).expect("Unable to convert primitive float to matrix item.")
    }
}
