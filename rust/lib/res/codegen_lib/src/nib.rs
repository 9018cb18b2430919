//! Nib accessor generator
//!
//! Pipeline: group nibs by symbol name → build one struct per unique nib →
//! assemble the internal (`_R.nib`) and external (`R.nib`) roots.
//! Duplicates and ordinal overflow are reported, never fatal.

use std::collections::BTreeSet;

use crate::diagnostics::Diagnostics;
use crate::group::{group_uniques_and_duplicates, Grouped};
use crate::ir::*;
use crate::ordinal::ORDINALS;
use crate::sanitize::{sanitized_swift_name, string_literal, swift_identifier};

/// Name of both namespace roots.
pub const NAMESPACE: &str = "nib";

/// Expression for the injected hosting bundle.
pub const HOSTING_BUNDLE: &str = "_R.hostingBundle";

/// Alias bound to the reusable view type.
pub const REUSABLE_ALIAS: &str = "ReusableType";

/// Per-nib build result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NibStruct {
    /// Modules referenced by the reusable view type, if any.
    pub used_modules: BTreeSet<Module>,
    pub nib_struct: Struct,
}

/// Both namespace roots plus the modules they reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTree {
    /// `_R.nib`: one nested struct per nib.
    pub internal: Struct,
    /// `R.nib`: one static var per nib.
    pub external: Struct,
    pub used_modules: BTreeSet<Module>,
}

impl NamespaceTree {
    pub fn is_empty(&self) -> bool {
        self.internal.is_empty() && self.external.is_empty() && self.used_modules.is_empty()
    }
}

/// Run the whole pipeline. Warnings go to `diagnostics`.
pub fn generate(nibs: &[ResourceDescriptor], diagnostics: &mut dyn Diagnostics) -> NamespaceTree {
    let grouped = group_nibs(nibs);

    for duplicate in &grouped.duplicates {
        diagnostics.warn(duplicate_warning(duplicate));
    }
    for nib in &grouped.uniques {
        if let Some(message) = overflow_warning(nib) {
            diagnostics.warn(message);
        }
    }

    assemble(&grouped.uniques)
}

/// Group nibs by the symbol the external root would emit for them.
pub fn group_nibs(nibs: &[ResourceDescriptor]) -> Grouped<&ResourceDescriptor> {
    group_uniques_and_duplicates(nibs, |nib| sanitized_swift_name(&nib.name, true))
}

/// Warning for one duplicate group. Names are sorted so the message does
/// not depend on input order.
pub fn duplicate_warning(duplicate: &[&ResourceDescriptor]) -> String {
    let symbol = duplicate
        .first()
        .map(|nib| sanitized_swift_name(&nib.name, true))
        .unwrap_or_default();
    let mut names: Vec<&str> = duplicate.iter().map(|nib| nib.name.as_str()).collect();
    names.sort_unstable();

    format!(
        "Skipping {} resources because symbol '{}' would be generated for all of these: {}",
        duplicate.len(),
        symbol,
        names.join(", ")
    )
}

/// Warning for a nib with more root views than there are ordinal words.
pub fn overflow_warning(nib: &ResourceDescriptor) -> Option<String> {
    let skipped = nib.root_elements.len().saturating_sub(ORDINALS.len());
    if skipped == 0 {
        return None;
    }
    Some(format!(
        "Nib '{}' has {} root views; only the first {} get accessors, skipping {}",
        nib.name,
        nib.root_elements.len(),
        ORDINALS.len(),
        skipped
    ))
}

/// Fold per-nib structs into both roots.
pub fn assemble(uniques: &[&ResourceDescriptor]) -> NamespaceTree {
    let (used_modules, nib_structs) = uniques.iter().map(|nib| nib_struct_for_nib(nib)).fold(
        (BTreeSet::new(), Vec::with_capacity(uniques.len())),
        |(mut used_modules, mut nib_structs), value| {
            used_modules.extend(value.used_modules);
            nib_structs.push(value.nib_struct);
            (used_modules, nib_structs)
        },
    );

    NamespaceTree {
        internal: internal_root(nib_structs),
        external: external_root(uniques),
        used_modules,
    }
}

pub fn internal_root(nib_structs: Vec<Struct>) -> Struct {
    Struct {
        structs: nib_structs,
        ..Struct::new(Type::host(NAMESPACE))
    }
}

pub fn external_root(uniques: &[&ResourceDescriptor]) -> Struct {
    Struct {
        vars: uniques.iter().map(|nib| nib_var_for_nib(nib)).collect(),
        ..Struct::new(Type::host(NAMESPACE))
    }
}

/// Type name of the internal struct for `nib`, e.g. `_LoginView`.
/// The `_` prefix keeps keywords legal, so no backticks here.
pub fn nib_struct_name(nib: &ResourceDescriptor) -> String {
    format!("_{}", swift_identifier(&nib.name, false))
}

/// `static var cell: _R.nib._Cell { return _R.nib._Cell() }`
pub fn nib_var_for_nib(nib: &ResourceDescriptor) -> Var {
    let struct_type = Type::host(format!("_R.{}.{}", NAMESPACE, nib_struct_name(nib)));
    let getter = format!("return {}()", struct_type);
    Var::new_static(nib.name.clone(), struct_type, getter)
}

/// Build the internal struct for one nib.
pub fn nib_struct_for_nib(nib: &ResourceDescriptor) -> NibStruct {
    let instantiate_parameters = vec![
        Parameter::new("ownerOrNil", Type::any_object().as_optional()),
        Parameter::with_local_name("options", "optionsOrNil", Type::nib_options()),
    ];
    let arguments = call_arguments(&instantiate_parameters);
    let name_literal = string_literal(&nib.name);

    let bundle_var = Var::new(
        "bundle",
        Type::ns_bundle().as_optional(),
        format!("return {}", HOSTING_BUNDLE),
    );

    let name_var = Var::new("name", Type::string(), format!("return {}", name_literal));

    let instantiate = Function::new(
        "initialize",
        vec![],
        Type::ui_nib(),
        format!(
            "return UINib.init(nibName: {}, bundle: {})",
            name_literal, HOSTING_BUNDLE
        ),
    );

    let instantiate_func = Function::new(
        "instantiateWithOwner",
        instantiate_parameters.clone(),
        Type::any_object_array(),
        format!(
            "return {}().instantiateWithOwner({})",
            instantiate.call_name(),
            arguments
        ),
    );

    let view_funcs: Vec<Function> = nib
        .root_elements
        .iter()
        .zip(ORDINALS.iter())
        .map(|(view, ordinal)| {
            Function::new(
                format!("{}View", ordinal.word),
                instantiate_parameters.clone(),
                view.as_optional(),
                format!(
                    "return {}({})[{}] as? {}",
                    instantiate_func.call_name(),
                    arguments,
                    ordinal.number - 1,
                    view.as_required()
                ),
            )
        })
        .collect();

    let mut nib_struct = Struct::new(Type::host(nib_struct_name(nib)));
    nib_struct.implements.insert(Capability::NibResource);
    nib_struct.vars = vec![bundle_var, name_var];
    nib_struct.functions = vec![instantiate, instantiate_func];
    nib_struct.functions.extend(view_funcs);

    let mut used_modules = BTreeSet::new();
    if let Some(reusable) = sole_reusable(nib) {
        nib_struct.vars.push(Var::new(
            "identifier",
            Type::string(),
            format!("return {}", string_literal(&reusable.identifier)),
        ));
        nib_struct.typealiases.push(Typealias {
            alias: REUSABLE_ALIAS.to_string(),
            ty: reusable.element_type.as_required(),
        });
        nib_struct.implements.insert(Capability::ReuseIdentifierHolder);
        used_modules.insert(reusable.element_type.module.clone());
    }

    NibStruct {
        used_modules,
        nib_struct,
    }
}

/// Forward `parameters` to another call: the first argument is positional,
/// the rest are labelled, e.g. `ownerOrNil, options: optionsOrNil`.
fn call_arguments(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .enumerate()
        .map(|(index, parameter)| {
            if index == 0 {
                parameter.binding().to_string()
            } else {
                format!("{}: {}", parameter.name, parameter.binding())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The reusable of a nib with exactly one root view and exactly one
/// reusable; `None` for every other shape.
fn sole_reusable(nib: &ResourceDescriptor) -> Option<&ReusableDescriptor> {
    match (nib.root_elements.as_slice(), nib.reusables.as_slice()) {
        ([_], [reusable]) => Some(reusable),
        _ => None,
    }
}
