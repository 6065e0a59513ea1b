//! Domain value objects.
//!
//! Type-safe wrappers for the identifiers that flow between the HTTP
//! surface, the contact service, and the store.

pub mod contact_id;

pub use contact_id::ContactId;
