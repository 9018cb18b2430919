//! Swift source generator for the nib namespace tree

use std::collections::BTreeSet;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::CodegenError;
use crate::ir::*;
use crate::nib::{self, NamespaceTree};
use crate::sanitize::sanitized_swift_name;
use crate::Diagnostics;

const INDENT: &str = "  ";

/// Knobs for the rendered file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwiftOptions {
    /// Path of the generated file, relative to the output directory.
    pub file_name: String,

    /// Expression assigned to `_R.hostingBundle`.
    pub hosting_bundle: String,

    /// Modules imported regardless of what the nibs reference.
    pub imports: Vec<String>,
}

impl Default for SwiftOptions {
    fn default() -> Self {
        Self {
            file_name: "R.generated.swift".to_string(),
            hosting_bundle: "NSBundle.mainBundle()".to_string(),
            imports: vec!["Foundation".to_string(), "UIKit".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SwiftCodegen {
    pub options: SwiftOptions,
}

impl SwiftCodegen {
    pub fn new(options: SwiftOptions) -> Self {
        Self { options }
    }
}

impl crate::Codegen for SwiftCodegen {
    fn generate(
        &self,
        catalog: &ResourceCatalog,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<crate::GeneratedCode> {
        let tree = nib::generate(&catalog.nibs, diagnostics);
        let content = render_file(&tree, &self.options)?;

        Ok(crate::GeneratedCode {
            files: vec![crate::GeneratedFile {
                path: self.options.file_name.clone(),
                content,
            }],
        })
    }

    fn language(&self) -> &str {
        "swift"
    }
}

/// Render the complete generated file.
pub fn render_file(tree: &NamespaceTree, options: &SwiftOptions) -> Result<String, CodegenError> {
    let mut output = String::new();

    output.push_str("// This is a generated file, do not edit!\n");
    output.push_str("// Generated by resgen\n\n");

    for module in imports(tree, options) {
        output.push_str(&format!("import {}\n", module));
    }
    output.push('\n');

    output.push_str("struct R {\n");
    render_struct(&tree.external, 1, &mut output)?;
    output.push_str("}\n\n");

    output.push_str("struct _R {\n");
    output.push_str(&format!(
        "{}static let hostingBundle: {} = {}\n\n",
        INDENT,
        Type::ns_bundle().as_optional(),
        options.hosting_bundle
    ));
    render_struct(&tree.internal, 1, &mut output)?;
    output.push_str("}\n");

    Ok(output)
}

/// Base imports plus every custom module the tree references, sorted.
pub fn imports(tree: &NamespaceTree, options: &SwiftOptions) -> BTreeSet<String> {
    options
        .imports
        .iter()
        .cloned()
        .chain(
            tree.used_modules
                .iter()
                .filter_map(|m| m.import_name().map(str::to_string)),
        )
        .collect()
}

/// Render one struct declaration at `depth` levels of indentation.
pub fn render_struct(s: &Struct, depth: usize, output: &mut String) -> Result<(), CodegenError> {
    let duplicates = s.duplicate_member_names();
    if !duplicates.is_empty() {
        return Err(CodegenError::InvalidMember(format!(
            "struct '{}' declares {} more than once",
            s.name(),
            duplicates.join(", ")
        )));
    }

    let pad = INDENT.repeat(depth);
    let inner = INDENT.repeat(depth + 1);

    let conformances: Vec<String> = s
        .implements
        .iter()
        .map(|c| c.protocol_type().to_string())
        .collect();
    if conformances.is_empty() {
        output.push_str(&format!("{}struct {} {{\n", pad, s.name()));
    } else {
        output.push_str(&format!(
            "{}struct {}: {} {{\n",
            pad,
            s.name(),
            conformances.join(", ")
        ));
    }

    let mut sections: Vec<String> = Vec::new();

    if !s.typealiases.is_empty() {
        let block: String = s
            .typealiases
            .iter()
            .map(|t| format!("{}typealias {} = {}\n", inner, t.alias, t.ty))
            .collect();
        sections.push(block);
    }

    if !s.vars.is_empty() {
        let block: String = s.vars.iter().map(|v| render_var(v, &inner)).collect();
        sections.push(block);
    }

    for function in &s.functions {
        sections.push(render_function(function, &inner));
    }

    for nested in &s.structs {
        let mut block = String::new();
        render_struct(nested, depth + 1, &mut block)?;
        sections.push(block);
    }

    output.push_str(&sections.join("\n"));
    output.push_str(&format!("{}}}\n", pad));
    Ok(())
}

fn render_var(var: &Var, indent: &str) -> String {
    format!(
        "{}{}var {}: {} {{ {} }}\n",
        indent,
        static_prefix(var.is_static),
        sanitized_swift_name(&var.name, true),
        var.ty,
        var.getter
    )
}

fn render_function(function: &Function, indent: &str) -> String {
    let parameters: Vec<String> = function.parameters.iter().map(render_parameter).collect();
    let mut output = format!(
        "{}{}func {}({}) -> {} {{\n",
        indent,
        static_prefix(function.is_static),
        sanitized_swift_name(&function.name, true),
        parameters.join(", "),
        function.return_type
    );
    for line in function.body.lines() {
        output.push_str(&format!("{}{}{}\n", indent, INDENT, line));
    }
    output.push_str(&format!("{}}}\n", indent));
    output
}

fn render_parameter(parameter: &Parameter) -> String {
    match &parameter.local_name {
        Some(local) => format!("{} {}: {}", parameter.name, local, parameter.ty),
        None => format!("{}: {}", parameter.name, parameter.ty),
    }
}

fn static_prefix(is_static: bool) -> &'static str {
    if is_static {
        "static "
    } else {
        ""
    }
}
