//! Outbound adapters implementing domain ports.
//!
//! Adapters are thin translators between domain types and the storage they
//! wrap. They contain no business logic.
//!
//! - **memory**: process-local storage guarded by locks.

pub mod memory;
