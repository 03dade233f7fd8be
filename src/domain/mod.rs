//! Domain types and ports.
//!
//! Every entity here is owned by the remote gateway; the records exist for
//! transport fidelity only and are never persisted locally. The port traits
//! in [`ports`] describe the remote client surface the adapter consumes.

pub mod client_token;
pub mod customer;
pub mod payment_method;
pub mod ports;
pub mod subscription;
pub mod transaction;
pub mod validation;
