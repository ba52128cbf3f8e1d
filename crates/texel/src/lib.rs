#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use texel_tensor as tensor;

#[doc(inline)]
pub use texel_image as image;

#[doc(inline)]
pub use texel_imgproc as imgproc;
