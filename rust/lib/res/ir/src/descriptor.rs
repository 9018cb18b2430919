//! Descriptor IR — nib resources as handed over by the extraction step.

use serde::{Deserialize, Serialize};

use crate::types::Type;

/// A view inside a nib registered under a reuse identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReusableDescriptor {
    /// Key used to register/dequeue the view at runtime.
    pub identifier: String,

    pub element_type: Type,
}

/// One loadable nib.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Raw file name without extension (e.g. `LoginView`, `my-cell`).
    pub name: String,

    /// Top-level views in file order. Order drives ordinal naming.
    #[serde(default)]
    pub root_elements: Vec<Type>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reusables: Vec<ReusableDescriptor>,
}

impl ResourceDescriptor {
    /// A nib without any views.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root_elements: vec![],
            reusables: vec![],
        }
    }

    pub fn with_root(mut self, element_type: Type) -> Self {
        self.root_elements.push(element_type);
        self
    }

    pub fn with_reusable(mut self, identifier: impl Into<String>, element_type: Type) -> Self {
        self.reusables.push(ReusableDescriptor {
            identifier: identifier.into(),
            element_type,
        });
        self
    }
}

/// All nibs of one project. This is what the catalog JSON file holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCatalog {
    #[serde(default)]
    pub nibs: Vec<ResourceDescriptor>,
}
