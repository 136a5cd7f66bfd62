//! Read-only query layer over one resolved type-graph snapshot
//!
//! The graph is the engine's oracle: an immutable view of every type the host
//! compiler resolved, in a stable enumeration order. All queries are pure and
//! total — a missing attribute, constructor or base type answers with an
//! empty result, never an error.

pub mod attributes;
pub mod builder;
pub mod types;

use std::collections::{HashMap, HashSet};

pub use attributes::{AttributeInstance, AttributeKind, Lifetime};
pub use builder::{TypeBuilder, TypeGraphBuilder};
pub use types::{
    Accessibility, ConstructorDescriptor, MethodDescriptor, ParameterDescriptor, TypeDescriptor,
    TypeName,
};

/// One immutable compilation snapshot: all resolved types plus the
/// assembly-level attribute applications.
///
/// Enumeration order is the insertion order of the builder and is the only
/// ordering guarantee the emission sequencer relies on: same snapshot in,
/// same sequence out.
#[derive(Debug, Default)]
pub struct TypeGraph {
    types: Vec<TypeDescriptor>,
    index: HashMap<String, usize>,
    assembly_attributes: Vec<AttributeInstance>,
}

impl TypeGraph {
    pub fn builder() -> TypeGraphBuilder {
        TypeGraphBuilder::default()
    }

    pub(crate) fn from_parts(
        types: Vec<TypeDescriptor>,
        assembly_attributes: Vec<AttributeInstance>,
    ) -> Self {
        let mut index = HashMap::with_capacity(types.len());
        let mut deduped = Vec::with_capacity(types.len());
        for ty in types {
            let canonical = ty.name.canonical();
            if index.contains_key(&canonical) {
                tracing::warn!(type_name = %canonical, "duplicate type in snapshot, keeping first");
                continue;
            }
            index.insert(canonical, deduped.len());
            deduped.push(ty);
        }
        Self {
            types: deduped,
            index,
            assembly_attributes,
        }
    }

    /// All types in stable enumeration order.
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Look a type up by canonical name.
    pub fn get(&self, name: &TypeName) -> Option<&TypeDescriptor> {
        self.index.get(&name.canonical()).map(|&i| &self.types[i])
    }

    /// Directly-attached attributes of one kind, in declaration order.
    /// Inherited attributes are intentionally not searched.
    pub fn attributes_of_kind<'a>(
        &self,
        ty: &'a TypeDescriptor,
        kind: AttributeKind,
    ) -> impl Iterator<Item = &'a AttributeInstance> {
        ty.attributes.iter().filter(move |a| a.kind == kind)
    }

    /// Assembly-level attribute applications of one kind, in declaration order.
    pub fn assembly_attributes_of_kind(
        &self,
        kind: AttributeKind,
    ) -> impl Iterator<Item = &AttributeInstance> {
        self.assembly_attributes
            .iter()
            .filter(move |a| a.kind == kind)
    }

    /// Declared constructors, excluding compiler-synthesized defaults.
    pub fn constructors<'a>(
        &self,
        ty: &'a TypeDescriptor,
    ) -> impl Iterator<Item = &'a ConstructorDescriptor> {
        ty.constructors.iter().filter(|c| !c.is_implicit)
    }

    /// The transitive interface closure of a type, each entry in its closed
    /// form relative to the type. Supplied resolved by the snapshot builder.
    pub fn all_interfaces<'a>(&self, ty: &'a TypeDescriptor) -> &'a [TypeName] {
        &ty.interfaces
    }

    /// Lazy walk of the base-type chain, nearest base first. The walk stops
    /// when a base is not present in the snapshot or when a cycle is detected
    /// in a malformed snapshot.
    pub fn base_chain(&self, ty: &TypeDescriptor) -> BaseChain<'_> {
        BaseChain {
            graph: self,
            next: ty.base_type.clone(),
            seen: HashSet::new(),
        }
    }

    /// Identity by canonical fully-qualified name.
    pub fn is_same_type(&self, a: &TypeName, b: &TypeName) -> bool {
        a == b
    }
}

/// Iterator over a type's base-type chain. See [`TypeGraph::base_chain`].
pub struct BaseChain<'a> {
    graph: &'a TypeGraph,
    next: Option<TypeName>,
    seen: HashSet<String>,
}

impl Iterator for BaseChain<'_> {
    type Item = TypeName;

    fn next(&mut self) -> Option<TypeName> {
        let current = self.next.take()?;
        if !self.seen.insert(current.canonical()) {
            return None;
        }
        self.next = self
            .graph
            .get(&current)
            .and_then(|descriptor| descriptor.base_type.clone());
        Some(current)
    }
}
