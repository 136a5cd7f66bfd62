//! Decoration resolution
//!
//! Turns `Decorate` attributes into decorated/decorator pairs. Resolution is
//! stricter than registration: there is no self-decoration fallback, and a
//! pair whose service type cannot be resolved — or which the decorator does
//! not structurally implement — is silently dropped.

use crate::graph::{AttributeKind, TypeDescriptor, TypeGraph, TypeName};
use crate::resolve::infer_single_interface;

/// One resolved decoration: `decorator_type` wraps `decorated_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationEntry {
    pub decorated_type: TypeName,
    pub decorator_type: TypeName,
}

/// Resolve all `Decorate` attributes on `ty`, in declaration order.
pub fn resolve(graph: &TypeGraph, ty: &TypeDescriptor) -> Vec<DecorationEntry> {
    let mut entries = Vec::new();

    for attribute in graph.attributes_of_kind(ty, AttributeKind::Decorate) {
        let Some(decorated) = attribute
            .service_type
            .clone()
            .or_else(|| infer_single_interface(graph, ty))
        else {
            continue;
        };

        if !implements_or_derives(graph, ty, &decorated) {
            tracing::debug!(
                decorator = %ty.name,
                decorated = %decorated,
                "dropping decoration, decorator does not implement service type"
            );
            continue;
        }

        entries.push(DecorationEntry {
            decorated_type: decorated,
            decorator_type: ty.name.clone(),
        });
    }

    entries
}

/// The decorator must carry the decorated service in its interface closure
/// or its base chain.
fn implements_or_derives(graph: &TypeGraph, ty: &TypeDescriptor, service: &TypeName) -> bool {
    graph
        .all_interfaces(ty)
        .iter()
        .any(|i| graph.is_same_type(i, service))
        || graph.base_chain(ty).any(|b| graph.is_same_type(&b, service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AttributeInstance, TypeBuilder, TypeGraph};

    #[test]
    fn infers_from_single_interface() {
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "LoggingService")
                .implements(TypeName::new("App", "IService"))
                .attribute(AttributeInstance::decorate())
                .finish())
            .build();
        let entries = resolve(&graph, &graph.types()[0]);
        assert_eq!(
            entries,
            vec![DecorationEntry {
                decorated_type: TypeName::new("App", "IService"),
                decorator_type: TypeName::new("App", "LoggingService"),
            }]
        );
    }

    #[test]
    fn ambiguous_service_type_drops_silently() {
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "Decorator")
                .implements(TypeName::new("App", "IFirst"))
                .implements(TypeName::new("App", "ISecond"))
                .attribute(AttributeInstance::decorate())
                .finish())
            .build();
        assert!(resolve(&graph, &graph.types()[0]).is_empty());
    }

    #[test]
    fn explicit_service_type_must_be_implemented() {
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "Decorator")
                .implements(TypeName::new("App", "IFirst"))
                .attribute(
                    AttributeInstance::decorate()
                        .with_service_type(TypeName::new("App", "IUnrelated")),
                )
                .finish())
            .build();
        assert!(resolve(&graph, &graph.types()[0]).is_empty());
    }

    #[test]
    fn base_class_decoration_is_allowed() {
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "BaseHandler").abstract_().finish())
            .ty(TypeBuilder::concrete("App", "AuditHandler")
                .base(TypeName::new("App", "BaseHandler"))
                .attribute(
                    AttributeInstance::decorate()
                        .with_service_type(TypeName::new("App", "BaseHandler")),
                )
                .finish())
            .build();
        let entries = resolve(&graph, &graph.types()[1]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].decorated_type, TypeName::new("App", "BaseHandler"));
    }

    #[test]
    fn never_collapses_to_self() {
        // Same shape that collapses for registration must simply resolve
        // the interface here; decoration of self makes no sense.
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "Wrapper")
                .implements(TypeName::new("App", "IWrapped"))
                .attribute(AttributeInstance::decorate())
                .finish())
            .build();
        let entries = resolve(&graph, &graph.types()[0]);
        assert_eq!(entries[0].decorated_type, TypeName::new("App", "IWrapped"));
        assert_ne!(entries[0].decorated_type, entries[0].decorator_type);
    }
}
