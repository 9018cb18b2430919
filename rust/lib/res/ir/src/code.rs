//! Code IR — the declarations a generator produces.
//!
//! These are target-neutral value objects. Names are stored as the
//! generator chose them; the renderer sanitizes them when emitting.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{Capability, Type};

/// A computed property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Var {
    pub is_static: bool,

    /// Logical name (may still need sanitizing).
    pub name: String,

    pub ty: Type,

    /// Getter body, e.g. `return "Cell"`.
    pub getter: String,
}

impl Var {
    pub fn new(name: impl Into<String>, ty: Type, getter: impl Into<String>) -> Self {
        Self {
            is_static: false,
            name: name.into(),
            ty,
            getter: getter.into(),
        }
    }

    pub fn new_static(name: impl Into<String>, ty: Type, getter: impl Into<String>) -> Self {
        Self {
            is_static: true,
            ..Self::new(name, ty, getter)
        }
    }
}

/// A function parameter with an optional local (body-side) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,

    pub ty: Type,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            local_name: None,
            ty,
        }
    }

    pub fn with_local_name(
        name: impl Into<String>,
        local_name: impl Into<String>,
        ty: Type,
    ) -> Self {
        Self {
            name: name.into(),
            local_name: Some(local_name.into()),
            ty,
        }
    }

    /// Name the body uses to refer to this parameter.
    pub fn binding(&self) -> &str {
        self.local_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub is_static: bool,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub body: String,
}

impl Function {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        return_type: Type,
        body: impl Into<String>,
    ) -> Self {
        Self {
            is_static: false,
            name: name.into(),
            parameters,
            return_type,
            body: body.into(),
        }
    }

    /// Name used to call this function from a sibling member.
    pub fn call_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typealias {
    pub alias: String,
    pub ty: Type,
}

/// A (possibly nested) struct declaration.
///
/// Invariant: var names, function names and nested struct names are each
/// unique within one struct. See [`Struct::duplicate_member_names`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    pub ty: Type,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub implements: BTreeSet<Capability>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub typealiases: Vec<Typealias>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vars: Vec<Var>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<Function>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structs: Vec<Struct>,
}

impl Struct {
    /// An empty struct of the given type.
    pub fn new(ty: Type) -> Self {
        Self {
            ty,
            implements: BTreeSet::new(),
            typealiases: vec![],
            vars: vec![],
            functions: vec![],
            structs: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.ty.name
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.implements.contains(&capability)
    }

    /// Find a var by name.
    pub fn var(&self, name: &str) -> Option<&Var> {
        self.vars.iter().find(|v| v.name == name)
    }

    /// Find a function by name.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Find a typealias by its alias.
    pub fn typealias(&self, alias: &str) -> Option<&Typealias> {
        self.typealiases.iter().find(|t| t.alias == alias)
    }

    /// True if the struct declares nothing.
    pub fn is_empty(&self) -> bool {
        self.typealiases.is_empty()
            && self.vars.is_empty()
            && self.functions.is_empty()
            && self.structs.is_empty()
    }

    /// Member names declared more than once, prefixed by member kind
    /// (`var:`, `func:`, `struct:`). Does not descend into nested structs.
    pub fn duplicate_member_names(&self) -> Vec<String> {
        let mut duplicates = Vec::new();
        collect_duplicates("var", self.vars.iter().map(|v| v.name.as_str()), &mut duplicates);
        collect_duplicates("func", self.functions.iter().map(|f| f.name.as_str()), &mut duplicates);
        collect_duplicates("struct", self.structs.iter().map(|s| s.name()), &mut duplicates);
        duplicates
    }
}

fn collect_duplicates<'a>(
    kind: &str,
    names: impl Iterator<Item = &'a str>,
    duplicates: &mut Vec<String>,
) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            let entry = format!("{}:{}", kind, name);
            if !duplicates.contains(&entry) {
                duplicates.push(entry);
            }
        }
    }
}
