//! Generation driver
//!
//! One `Engine` invocation walks a single immutable snapshot: annotated
//! types through the registration/decoration resolvers and the extension
//! validator, assembly directives through the broadcast resolver, qualifying
//! constructors through the factory synthesizer, and everything into the
//! emission sequencer. Repeated invocations over the same snapshot are
//! independent and produce byte-identical output.

use std::collections::HashSet;

use thiserror::Error;

use crate::diagnostics::Diagnostic;
use crate::emit::{EmitOp, Sequencer};
use crate::graph::{AttributeKind, TypeGraph, TypeName};
use crate::resolve::{broadcast::BroadcastResolver, decoration, extensions, factory, registration};

/// Hard failures: no meaningful output is possible for the whole pass.
/// Everything recoverable is a [`Diagnostic`] instead.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum GenerateError {
    /// A factory had to be generated but neither its implementation type nor
    /// the engine options provide a namespace to place it in.
    #[error("unable to determine a namespace for the factory generated for '{type_name}'")]
    #[diagnostic(code(wiregen::undetermined_namespace))]
    UndeterminedNamespace { type_name: String },
}

/// Host-supplied configuration for one generation pass.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// The container collection type extension methods must accept.
    pub collection_type: TypeName,
    /// Namespace for generated factories whose implementation type has none.
    pub fallback_namespace: Option<String>,
    /// Whether a user-authored partial composition surface exists; when set,
    /// the emitted sequence starts by invoking its hook.
    pub user_defined_composition: bool,
}

impl EngineOptions {
    pub fn new(collection_type: TypeName) -> Self {
        Self {
            collection_type,
            fallback_namespace: None,
            user_defined_composition: false,
        }
    }

    pub fn with_fallback_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.fallback_namespace = Some(namespace.into());
        self
    }

    pub fn with_user_defined_composition(mut self) -> Self {
        self.user_defined_composition = true;
        self
    }
}

/// Result of one generation pass: the ordered instruction list plus every
/// non-fatal diagnostic reported along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    pub ops: Vec<EmitOp>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationOutput {
    /// Deterministic one-line-per-op script rendering, used by golden tests.
    pub fn script(&self) -> String {
        let lines: Vec<String> = self.ops.iter().map(|op| op.to_string()).collect();
        lines.join("\n")
    }
}

/// The resolution and code-synthesis engine over one snapshot.
pub struct Engine<'g> {
    graph: &'g TypeGraph,
    options: EngineOptions,
}

impl<'g> Engine<'g> {
    pub fn new(graph: &'g TypeGraph, options: EngineOptions) -> Self {
        Self { graph, options }
    }

    /// Run the full pass. The only `Err` is the structural-impossibility
    /// class; malformed declarations come back as diagnostics alongside the
    /// instructions for everything that did resolve.
    #[tracing::instrument(skip_all, fields(type_count = self.graph.types().len()))]
    pub fn generate(&self) -> Result<GenerationOutput, GenerateError> {
        let fallback = self.options.fallback_namespace.as_deref();
        let mut sequencer = Sequencer::new(self.options.user_defined_composition);
        let mut diagnostics = Vec::new();
        // One factory per implementation type, however many paths request it.
        let mut synthesized: HashSet<String> = HashSet::new();

        for ty in self.graph.types() {
            let entries = registration::resolve(self.graph, ty);

            if let Some(first) = entries.first() {
                if let Some(factory) = factory::synthesize(self.graph, ty, first, fallback)? {
                    if synthesized.insert(factory.backing_implementation.canonical()) {
                        sequencer.push_factory(factory);
                    }
                }
            }
            for entry in entries {
                sequencer.push_registration(entry);
            }

            for entry in decoration::resolve(self.graph, ty) {
                sequencer.push_decoration(entry);
            }

            for extension in extensions::validate(ty, &self.options.collection_type) {
                if extension.is_valid() {
                    sequencer.push_extension(extension);
                } else {
                    diagnostics.extend(extension.diagnostics);
                }
            }
        }

        let mut broadcast = BroadcastResolver::new(self.graph);
        for directive in self
            .graph
            .assembly_attributes_of_kind(AttributeKind::RegisterAll)
        {
            for entry in broadcast.resolve(directive) {
                if entry.include_factory {
                    if let Some(ty) = self.graph.get(&entry.implementation_type) {
                        if let Some(factory) =
                            factory::synthesize(self.graph, ty, &entry, fallback)?
                        {
                            if synthesized.insert(factory.backing_implementation.canonical()) {
                                sequencer.push_factory(factory);
                            }
                        }
                    }
                }
                sequencer.push_broadcast(entry);
            }
        }

        Ok(GenerationOutput {
            ops: sequencer.into_ops(),
            diagnostics,
        })
    }
}
