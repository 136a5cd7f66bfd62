//! Extension-method validation
//!
//! User-declared static methods marked as registration extensions are called
//! from the generated composition step. Their signature contract: public or
//! internal, static, exactly one parameter, and that parameter must be the
//! container collection type. Each broken rule yields one diagnostic;
//! invalid methods are excluded from emission but never block anything else.

use crate::diagnostics::{errors, Diagnostic};
use crate::graph::{AttributeKind, TypeDescriptor, TypeName};

/// A validated pointer to a user-declared registration extension method.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionMethod {
    pub declaring_type: TypeName,
    pub method_name: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExtensionMethod {
    /// Only valid extensions make it into the emitted call sequence.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Validate every marked method on `ty` against the signature contract.
pub fn validate(ty: &TypeDescriptor, collection_type: &TypeName) -> Vec<ExtensionMethod> {
    let mut extensions = Vec::new();

    for method in &ty.methods {
        let is_marked = method
            .attributes
            .iter()
            .any(|a| a.kind == AttributeKind::RegistrationExtension);
        if !is_marked {
            continue;
        }

        let type_name = ty.name.canonical();
        let expected = collection_type.canonical();
        let mut diagnostics = Vec::new();

        if !method.accessibility.is_reachable() {
            diagnostics.push(errors::extension_not_accessible(&method.name, &type_name));
        }
        if !method.is_static {
            diagnostics.push(errors::extension_not_static(&method.name, &type_name));
        }
        if method.parameters.len() != 1 {
            diagnostics.push(errors::extension_parameter_count(
                &method.name,
                &type_name,
                &expected,
            ));
        }
        if let Some(first) = method.parameters.first() {
            if first.type_name != *collection_type {
                diagnostics.push(errors::extension_parameter_type(
                    &method.name,
                    &type_name,
                    &expected,
                ));
            }
        }

        extensions.push(ExtensionMethod {
            declaring_type: ty.name.clone(),
            method_name: method.name.clone(),
            diagnostics,
        });
    }

    extensions
}
