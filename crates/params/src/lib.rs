//! Constant values for the cozec library
//!
//! This crate holds nothing but data: big-endian encodings of published
//! curve parameters. Turning them into field elements and points is the job
//! of `cozec-algorithms`.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod curves;
