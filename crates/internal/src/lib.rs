//! Internal utilities shared by the cozec crates
//!
//! Nothing in here is cryptographic on its own; these are the small
//! branch-free building blocks the field and point code is assembled from.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constant_time;
