#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `texel-tensor` provides the contiguous, row-major buffer that backs images and
//! the sample batches produced by the interpolation engine. Tensors own their data,
//! carry their shape and strides, and check every construction against the shape.
//!
//! ```rust
//! use texel_tensor::Tensor2;
//!
//! let t = Tensor2::<f32>::from_shape_vec([2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! assert_eq!(t.get([1, 2]), Some(&6.0));
//! assert_eq!(t.strides, [3, 1]);
//! ```

/// Tensor module containing the main tensor implementation and error types.
pub mod tensor;

/// Serde module for tensor serialization, enabled with the `serde` feature.
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::tensor::{get_strides_from_shape, Tensor, TensorError};

/// Type alias for a 1-dimensional tensor.
pub type Tensor1<T> = Tensor<T, 1>;

/// Type alias for a 2-dimensional tensor.
pub type Tensor2<T> = Tensor<T, 2>;

/// Type alias for a 3-dimensional tensor.
pub type Tensor3<T> = Tensor<T, 3>;
