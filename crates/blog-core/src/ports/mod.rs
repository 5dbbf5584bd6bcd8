//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (services and
//! controllers) and infrastructure or presentation adapters. Controllers
//! only ever see these traits behind `Arc<dyn ...>`; the concrete store,
//! encoder, navigator and UI are chosen by the composition root.

pub mod app_dirs;
mod clock;
pub mod document_store;
pub mod errors;
pub mod file_encoder;
pub mod navigator;
pub mod ui_port;

pub use app_dirs::AppDirsPort;
pub use clock::*;
pub use document_store::DocumentStorePort;
pub use errors::{AppDirsError, EncodeError, StoreError};
pub use file_encoder::FileEncoderPort;
pub use navigator::NavigatorPort;
pub use ui_port::UiPort;
