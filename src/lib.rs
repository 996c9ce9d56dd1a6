//! This crate is a teaching library of fundamental data structures and algorithms, written from
//! scratch.
//!
//! # Purpose
//! Each component here exists so that its mechanics can be read, not so that it can outrun the
//! standard library. The growable array manages its own raw allocation, the linked list is an
//! owned chain of boxes, the stack and queue are adapters built on the array, and the graph
//! stores adjacency lists and walks them. None of the implementations lean on [`Vec`] or
//! [`std::collections`] for the part they are trying to demonstrate.
//!
//! # Error Handling
//! Failures are strongly typed. Every failure class is a small struct implementing
//! [`Error`](std::error::Error), and an [`AccessError`](collections::AccessError) enum unifies
//! them for callers that want to `?` more than one kind. Fallible operations come in pairs: a
//! short panicking form for ergonomic use (a user popping a stack usually considers emptiness a
//! bug) and a `try_` form returning a typed [`Result`]. Expected absence, like a search miss or
//! a missing vertex, is an [`Option`] rather than an error, because absence is a normal answer
//! and not a failure.
//!
//! # Iteration
//! Borrowed iterators hold a borrow of their container for as long as they live, so mutating a
//! container mid-iteration is rejected at compile time. There is no runtime fail-fast machinery
//! because the borrow checker already provides a stricter version of it.
//!
//! # Dependencies
//! `derive_more` removes the repetitive parts of declaring error enums. The graph uses `fxhash`
//! for its adjacency map, trading DoS resistance (irrelevant for integer vertex ids chosen by
//! the caller) for speed and determinism. Everything else is the standard library.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "algorithms")]
pub mod algorithms;
#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
