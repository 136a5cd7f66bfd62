//! Registration resolution
//!
//! Turns each `Register` attribute on a type into one [`RegistrationEntry`].
//! Service-type resolution order: explicit service type on the attribute,
//! else the type's single interface, else self. A resolved service type
//! identical to the implementation collapses to a single-type registration
//! (`service_type == None`).

use crate::graph::{AttributeKind, Lifetime, TypeDescriptor, TypeGraph, TypeName};
use crate::resolve::infer_single_interface;

/// One resolved registration, ready for emission.
///
/// `service_type == None` means the implementation is registered as its own
/// service (self-registration collapse). `service_name` selects the keyed
/// emission variant.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationEntry {
    pub service_type: Option<TypeName>,
    pub implementation_type: TypeName,
    pub lifetime: Lifetime,
    pub service_name: Option<String>,
    pub include_factory: bool,
}

/// Resolve all `Register` attributes on `ty`, in declaration order.
///
/// Types implementing several interfaces without an explicit service type
/// fall back to self-registration rather than reporting a diagnostic; the
/// ambiguity is the caller's to resolve with an explicit `ServiceType`.
pub fn resolve(graph: &TypeGraph, ty: &TypeDescriptor) -> Vec<RegistrationEntry> {
    let mut entries = Vec::new();

    for attribute in graph.attributes_of_kind(ty, AttributeKind::Register) {
        let requested = attribute
            .service_type
            .clone()
            .or_else(|| infer_single_interface(graph, ty));

        // Self-registration collapse: identical service and implementation
        // reduce to a single-type registration.
        let service_type = match requested {
            Some(service) if !graph.is_same_type(&service, &ty.name) => Some(service),
            _ => None,
        };

        entries.push(RegistrationEntry {
            service_type,
            implementation_type: ty.name.clone(),
            lifetime: attribute.lifetime.unwrap_or_default(),
            service_name: attribute.service_name.clone(),
            include_factory: attribute.include_factory,
        });
    }

    entries
}
