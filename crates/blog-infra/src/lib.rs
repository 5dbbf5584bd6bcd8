//! # blog-infra
//!
//! Adapters implementing the `blog-core` ports: document stores, the file
//! encoder, the system clock and the application directories.

pub mod app_dirs;
pub mod firestore;
pub mod fs;
pub mod memory;
pub mod time;

pub use app_dirs::DirsAppDirsAdapter;
pub use firestore::{FirestoreConfig, FirestoreDocumentStore};
pub use fs::DataUrlFileEncoder;
pub use memory::InMemoryDocumentStore;
pub use time::SystemClock;
