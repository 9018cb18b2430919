//! Codegen Library - typed nib accessor generation
//!
//! Turns a catalog of nib descriptors into a two-rooted namespace tree
//! (`R.nib` / `_R.nib`) and renders it as Swift source.

pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod group;
pub mod nib;
pub mod ordinal;
pub mod sanitize;
pub mod swift;

// Re-export IR types so callers only need this crate.
pub use resgen_ir as ir;
pub use resgen_ir::*;

pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use error::CodegenError;
pub use nib::{NamespaceTree, NibStruct};

/// Codegen trait - implement this for each target language
pub trait Codegen {
    fn generate(
        &self,
        catalog: &ResourceCatalog,
        diagnostics: &mut dyn Diagnostics,
    ) -> anyhow::Result<GeneratedCode>;
    fn language(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub files: Vec<GeneratedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}
