//! Data models for phonebook entries.

pub mod contact;

pub use contact::{Contact, ContactResponse, ContactUpdate};
