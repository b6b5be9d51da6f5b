//! Domain types for dirwatch.
//!
//! This module contains the core vocabulary shared between the watch engine
//! and the shell:
//!
//! - [`kind`] - Classification of filesystem change events
//! - [`format`] - The closed table of recognized file formats
//!
//! All public types are re-exported at this module level and at the crate
//! root:
//!
//! ```
//! use dw_core::{ChangeKind, FileFormat};
//! ```

mod format;
mod kind;

pub use format::FileFormat;
pub use kind::ChangeKind;
