//! Type references used across all IR layers.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Which dependency a type belongs to.
///
/// Only used to compute the import set of a generated file, never for
/// code logic. Serialized as a plain string: `"host"`, `"stdlib"`, or the
/// module name itself (e.g. `"UIKit"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Module {
    /// The module the generated file is compiled into.
    Host,
    /// Language built-ins, never imported.
    StdLib,
    /// An external module that has to be imported.
    Custom(String),
}

impl Module {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Name to use in an `import` statement, if this module needs one.
    pub fn import_name(&self) -> Option<&str> {
        match self {
            Module::Custom(name) => Some(name),
            Module::Host | Module::StdLib => None,
        }
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::Host
    }
}

impl From<String> for Module {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" | "host" => Module::Host,
            "stdlib" => Module::StdLib,
            _ => Module::Custom(value),
        }
    }
}

impl From<Module> for String {
    fn from(value: Module) -> Self {
        match value {
            Module::Host => "host".to_string(),
            Module::StdLib => "stdlib".to_string(),
            Module::Custom(name) => name,
        }
    }
}

/// A reference to a named type.
///
/// Two types are equal when module and name match; `optional` only
/// affects how the reference is printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Type {
    #[serde(default)]
    pub module: Module,

    pub name: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

impl Type {
    pub fn new(module: Module, name: impl Into<String>) -> Self {
        Self {
            module,
            name: name.into(),
            optional: false,
        }
    }

    /// A type declared in the generated file itself.
    pub fn host(name: impl Into<String>) -> Self {
        Self::new(Module::Host, name)
    }

    pub fn stdlib(name: impl Into<String>) -> Self {
        Self::new(Module::StdLib, name)
    }

    /// The same type, printed with a trailing `?`.
    pub fn as_optional(&self) -> Self {
        Self {
            optional: true,
            ..self.clone()
        }
    }

    /// The same type without the optional marker.
    pub fn as_required(&self) -> Self {
        Self {
            optional: false,
            ..self.clone()
        }
    }

    pub fn any_object() -> Self {
        Self::stdlib("AnyObject")
    }

    pub fn any_object_array() -> Self {
        Self::stdlib("[AnyObject]")
    }

    pub fn string() -> Self {
        Self::stdlib("String")
    }

    /// Options dictionary accepted by `UINib.instantiateWithOwner`.
    pub fn nib_options() -> Self {
        Self::stdlib("[NSObject : AnyObject]").as_optional()
    }

    pub fn ns_bundle() -> Self {
        Self::new(Module::custom("Foundation"), "NSBundle")
    }

    pub fn ui_nib() -> Self {
        Self::new(Module::custom("UIKit"), "UINib")
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.module == other.module && self.name == other.name
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.module.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "{}?", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// A protocol a generated struct conforms to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Every generated nib struct: exposes `bundle`, `name`, `initialize()`.
    NibResource,
    /// Nibs with exactly one root view and one reusable: exposes `identifier`.
    ReuseIdentifierHolder,
}

impl Capability {
    /// Stable tag, matches the serialized form.
    pub fn tag(&self) -> &'static str {
        match self {
            Capability::NibResource => "nib-resource",
            Capability::ReuseIdentifierHolder => "reuse-identifier-holder",
        }
    }

    /// The protocol type that carries this capability in generated code.
    pub fn protocol_type(&self) -> Type {
        match self {
            Capability::NibResource => Type::host("NibResourceType"),
            Capability::ReuseIdentifierHolder => Type::host("ReuseIdentifierType"),
        }
    }
}
