//! A module containing [`DynArray`] and its associated types.
//!
//! [`IntoIter`] provides owned iteration; borrowed iteration comes from [`std::slice`] through
//! `Deref`. [`DynArray`] is also re-exported under the parent module.

mod dyn_array;
mod iter;

pub use dyn_array::*;
pub use iter::*;
