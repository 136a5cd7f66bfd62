//! Abstract emission instructions
//!
//! The engine's output is a flat, ordered list of [`EmitOp`] values. A
//! separate back-end renders them to source text against a concrete
//! container API; the `Display` impl here is a deterministic one-line-per-op
//! script used for debugging and golden-output tests, not that back-end.

pub mod sequencer;

use std::fmt;

pub use sequencer::Sequencer;

use crate::graph::{Lifetime, TypeName};
use crate::resolve::factory::FactoryDescriptor;

/// One abstract "emit this call" instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum EmitOp {
    /// Invoke the pre-existing user-defined composition hook.
    CallCompositionHook,
    /// Register `implementation_type` under `service_type` (or as itself
    /// when `service_type` is `None`). A `service_name` selects the keyed
    /// call variant.
    CallRegistration {
        service_type: Option<TypeName>,
        implementation_type: TypeName,
        lifetime: Lifetime,
        service_name: Option<String>,
    },
    /// Wrap `decorated` registrations with `decorator`.
    CallDecoration {
        decorated: TypeName,
        decorator: TypeName,
    },
    /// Invoke a user-declared registration extension method.
    CallUserExtension {
        declaring_type: TypeName,
        method_name: String,
    },
    /// Define a generated factory pair (interface + implementation).
    DefineFactory(FactoryDescriptor),
}

impl fmt::Display for EmitOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitOp::CallCompositionHook => write!(f, "call composition_hook()"),
            EmitOp::CallRegistration {
                service_type,
                implementation_type,
                lifetime,
                service_name,
            } => {
                let keyed = if service_name.is_some() { "_keyed" } else { "" };
                write!(f, "add{keyed}_{}<", lifetime.keyword())?;
                if let Some(service) = service_type {
                    write!(f, "{service}, ")?;
                }
                write!(f, "{implementation_type}>(")?;
                if let Some(name) = service_name {
                    write!(f, "\"{name}\"")?;
                }
                write!(f, ")")
            }
            EmitOp::CallDecoration { decorated, decorator } => {
                write!(f, "decorate<{decorated}, {decorator}>()")
            }
            EmitOp::CallUserExtension {
                declaring_type,
                method_name,
            } => write!(f, "call {declaring_type}::{method_name}(services)"),
            EmitOp::DefineFactory(factory) => {
                write!(
                    f,
                    "define factory {}.{} / {}.{} : create(",
                    factory.namespace,
                    factory.interface_name,
                    factory.namespace,
                    factory.implementation_name
                )?;
                for (i, parameter) in factory.parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", parameter.name, parameter.type_name)?;
                }
                write!(f, ") -> {}", factory.return_type)
            }
        }
    }
}
