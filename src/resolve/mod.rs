//! Resolution passes: declarative annotations to output units
//!
//! Each resolver is a pure function (or a memoizing struct borrowing the
//! graph) from one annotated declaration to zero-or-more output units.
//! Nothing here emits code; the results funnel into the emission sequencer.

pub mod broadcast;
pub mod decoration;
pub mod extensions;
pub mod factory;
pub mod registration;

pub use broadcast::BroadcastResolver;
pub use decoration::DecorationEntry;
pub use extensions::ExtensionMethod;
pub use factory::{FactoryDescriptor, FactoryParameter};
pub use registration::RegistrationEntry;

use crate::graph::{TypeDescriptor, TypeGraph, TypeName};

/// Service-type inference shared by the registration and decoration
/// resolvers: a type implementing exactly one interface infers that
/// interface; anything else infers nothing.
pub(crate) fn infer_single_interface(
    graph: &TypeGraph,
    ty: &TypeDescriptor,
) -> Option<TypeName> {
    match graph.all_interfaces(ty) {
        [only] => Some(only.clone()),
        _ => None,
    }
}
