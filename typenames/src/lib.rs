//! Legacy tensor type names.
//!
//! Formats (backend, scalar type) pairs as dotted names such as
//! `torch.cuda.FloatTensor`, parses such names back, and enumerates the
//! combinations declared by the legacy type system.

pub mod config;
pub mod declared;
pub mod defaults;
pub mod error;
pub mod prelude;
pub mod registry;
pub mod textual;
pub mod types;

pub use error::{Error, Result};
