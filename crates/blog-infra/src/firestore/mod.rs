//! Cloud Firestore REST v1 document store.

mod client;
mod config;
mod field_path;
mod wire;

pub use client::FirestoreDocumentStore;
pub use config::FirestoreConfig;
