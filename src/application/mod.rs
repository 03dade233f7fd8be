//! Application layer containing the operation surface of the adapter.
//!
//! This module defines the `Gateway`, the primary entry point for every
//! customer, transaction, payment-method, subscription, and client-token
//! operation. It validates arguments locally, then delegates to the remote
//! client ports.

pub mod gateway;
