//! tcmodhelp — module help extracted from `*%*` annotated module sources.
//!
//! Pipeline: raw source lines → [`parser::tagged`] content lines →
//! [`parser::sections`] typed sections → [`render`] output. [`batch`] drives
//! it over many module sources.

pub mod batch;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

pub use error::{DocError, LoadError};
pub use model::{ModuleDoc, OptionKey, Section, SectionKind, SectionValue, Sections};
