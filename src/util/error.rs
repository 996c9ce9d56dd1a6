use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// The error produced when an index lies outside the valid bounds of an operation.
///
/// Note that the valid bounds differ by one between reads and insertions: reading accepts
/// `index < len` while inserting accepts `index <= len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for container with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The error produced when removing or reading an element from a container with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainer;

impl Display for EmptyContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Container is empty!")
    }
}

impl Error for EmptyContainer {}

/// Any failure an accessing operation can produce, for callers combining more than one fallible
/// call.
///
/// # Examples
/// ```
/// # use dsa_toolkit::collections::adapters::Stack;
/// # use dsa_toolkit::collections::AccessError;
/// fn take_two(stack: &mut Stack<u8>) -> Result<(u8, u8), AccessError> {
///     Ok((stack.try_pop()?, stack.try_pop()?))
/// }
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(take_two(&mut stack), Ok((2, 1)));
/// assert!(take_two(&mut stack).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum AccessError {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyContainer(EmptyContainer),
}
