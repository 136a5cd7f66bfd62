//! Emission sequencing
//!
//! Collects every resolved unit and lays the final instruction list out in
//! one fixed phase order — a design contract, so the generated composition
//! is byte-identical across repeated builds of the same snapshot:
//!
//! 1. user composition hook (when declared)
//! 2. per-type registration entries
//! 3. per-type decoration entries
//! 4. validated extension-method invocations
//! 5. factory definitions, each followed by its Singleton registration
//! 6. assembly-level broadcast entries
//!
//! Within each phase, pushes happen in graph enumeration order and attribute
//! declaration order, and that order is preserved verbatim.

use crate::emit::EmitOp;
use crate::graph::Lifetime;
use crate::resolve::decoration::DecorationEntry;
use crate::resolve::extensions::ExtensionMethod;
use crate::resolve::factory::FactoryDescriptor;
use crate::resolve::registration::RegistrationEntry;

/// Accumulates resolved units and produces the ordered instruction list.
#[derive(Debug, Default)]
pub struct Sequencer {
    composition_hook: bool,
    registrations: Vec<RegistrationEntry>,
    decorations: Vec<DecorationEntry>,
    extensions: Vec<ExtensionMethod>,
    factories: Vec<FactoryDescriptor>,
    broadcasts: Vec<RegistrationEntry>,
}

impl Sequencer {
    pub fn new(composition_hook: bool) -> Self {
        Self {
            composition_hook,
            ..Self::default()
        }
    }

    pub fn push_registration(&mut self, entry: RegistrationEntry) {
        self.registrations.push(entry);
    }

    pub fn push_decoration(&mut self, entry: DecorationEntry) {
        self.decorations.push(entry);
    }

    /// Invalid extensions must be filtered by the caller; pushing here means
    /// the method is part of the emitted sequence.
    pub fn push_extension(&mut self, extension: ExtensionMethod) {
        self.extensions.push(extension);
    }

    pub fn push_factory(&mut self, factory: FactoryDescriptor) {
        self.factories.push(factory);
    }

    pub fn push_broadcast(&mut self, entry: RegistrationEntry) {
        self.broadcasts.push(entry);
    }

    /// Lay out the final sequence.
    pub fn into_ops(self) -> Vec<EmitOp> {
        let mut ops = Vec::new();

        if self.composition_hook {
            ops.push(EmitOp::CallCompositionHook);
        }

        for entry in self.registrations {
            ops.push(registration_op(entry));
        }

        for decoration in self.decorations {
            ops.push(EmitOp::CallDecoration {
                decorated: decoration.decorated_type,
                decorator: decoration.decorator_type,
            });
        }

        for extension in self.extensions {
            ops.push(EmitOp::CallUserExtension {
                declaring_type: extension.declaring_type,
                method_name: extension.method_name,
            });
        }

        for factory in self.factories {
            // The factory pair is defined and its interface registered as a
            // Singleton in one breath.
            let registration = EmitOp::CallRegistration {
                service_type: Some(factory.interface_type()),
                implementation_type: factory.implementation_type(),
                lifetime: Lifetime::Singleton,
                service_name: None,
            };
            ops.push(EmitOp::DefineFactory(factory));
            ops.push(registration);
        }

        for entry in self.broadcasts {
            ops.push(registration_op(entry));
        }

        ops
    }
}

fn registration_op(entry: RegistrationEntry) -> EmitOp {
    EmitOp::CallRegistration {
        service_type: entry.service_type,
        implementation_type: entry.implementation_type,
        lifetime: entry.lifetime,
        service_name: entry.service_name,
    }
}
