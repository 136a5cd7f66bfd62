//! Broadcast (`RegisterAll`) resolution
//!
//! An assembly-level directive names a target type — possibly an open
//! generic — and every concrete type in the snapshot is tested against it.
//! This is the one whole-graph scan in the engine, so scan results are
//! memoized per target definition for the lifetime of the resolver (one
//! snapshot).

use std::collections::HashMap;

use crate::graph::{AttributeInstance, TypeGraph, TypeName};
use crate::resolve::registration::RegistrationEntry;

/// One candidate match: the implementing type and the closed service type it
/// was matched under.
#[derive(Debug, Clone, PartialEq)]
struct BroadcastMatch {
    implementation: TypeName,
    service: TypeName,
}

/// Resolves assembly-level `RegisterAll` directives against the whole graph.
///
/// Borrowing the graph scopes the memoized scans to one snapshot; a new
/// snapshot gets a new resolver.
pub struct BroadcastResolver<'g> {
    graph: &'g TypeGraph,
    scans: HashMap<String, Vec<BroadcastMatch>>,
}

impl<'g> BroadcastResolver<'g> {
    pub fn new(graph: &'g TypeGraph) -> Self {
        Self {
            graph,
            scans: HashMap::new(),
        }
    }

    /// Resolve one directive into registration entries, in graph enumeration
    /// order. A directive without a target type resolves to nothing.
    pub fn resolve(&mut self, directive: &AttributeInstance) -> Vec<RegistrationEntry> {
        let Some(target) = directive.service_type.as_ref() else {
            return Vec::new();
        };

        let lifetime = directive.lifetime.unwrap_or_default();
        let include_service_name = directive.include_service_name;
        let include_factory = directive.include_factory;

        self.implementations(target)
            .iter()
            .map(|m| RegistrationEntry {
                service_type: Some(m.service.clone()),
                implementation_type: m.implementation.clone(),
                lifetime,
                service_name: include_service_name
                    .then(|| m.implementation.short_name().to_string()),
                include_factory,
            })
            .collect()
    }

    /// Scan the whole graph for implementors of `target`, memoized per
    /// target definition.
    ///
    /// Two independent rules apply per candidate, and both may match:
    /// an interface in the candidate's closure sharing the target's generic
    /// definition, and a base class in the candidate's chain doing the same.
    /// The registered service is always the candidate's closed form.
    #[tracing::instrument(skip_all, fields(target = %target))]
    fn implementations(&mut self, target: &TypeName) -> &[BroadcastMatch] {
        let key = target.definition().canonical();
        let graph = self.graph;
        self.scans.entry(key).or_insert_with(|| {
            let mut matches = Vec::new();
            for candidate in graph.types() {
                if candidate.is_abstract || candidate.name.is_open() {
                    continue;
                }
                if let Some(interface) = graph
                    .all_interfaces(candidate)
                    .iter()
                    .find(|i| i.same_definition(target))
                {
                    matches.push(BroadcastMatch {
                        implementation: candidate.name.clone(),
                        service: interface.clone(),
                    });
                }
                if let Some(base) = graph
                    .base_chain(candidate)
                    .find(|b| b.same_definition(target))
                {
                    matches.push(BroadcastMatch {
                        implementation: candidate.name.clone(),
                        service: base,
                    });
                }
            }
            tracing::debug!(match_count = matches.len(), "broadcast scan complete");
            matches
        })
    }
}
