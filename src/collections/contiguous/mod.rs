//! Contiguous storage. [`DynArray`] is a growable array over a single heap allocation, with an
//! automatic grow and shrink policy.
#![warn(missing_docs)]

pub mod dyn_array;
mod raw;

#[doc(inline)]
pub use dyn_array::DynArray;
pub(crate) use raw::RawBuffer;
