//! Validation harness for the cozec library
//!
//! Everything here runs against the public API only. [`oracle`] wraps the
//! RustCrypto `p256` crate as an independent reference for `k·P`, and
//! [`constant_time`] holds the statistical timing tester used to compare the
//! ladder's running time across very different scalars.

pub mod oracle;
