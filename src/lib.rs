//! Sphinx Scrub
//!
//! Post-processing hooks for Sphinx API reference builds: cleans generated
//! reStructuredText page sources and filters private members out of the docs.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod extension;
pub mod members;

pub use cleaner::{clean_source, AUTOMODULE_MARKER};
pub use config::{InclusionTable, ScrubConfig};
pub use error::ScrubError;
pub use extension::{AutodocHooks, ScrubExtension};
pub use members::{MemberDescriptor, MemberFilter, MemberKind};
