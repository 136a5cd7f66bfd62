//! Snapshot construction surface
//!
//! Host adapters translate the compiler's symbol model into a `TypeGraph`
//! through these builders; the engine's own tests use them the same way.
//! Insertion order becomes the graph's stable enumeration order.

use crate::graph::attributes::AttributeInstance;
use crate::graph::types::{
    ConstructorDescriptor, MethodDescriptor, TypeDescriptor, TypeName,
};
use crate::graph::TypeGraph;

/// Builds one immutable [`TypeGraph`] snapshot.
#[derive(Debug, Default)]
pub struct TypeGraphBuilder {
    types: Vec<TypeDescriptor>,
    assembly_attributes: Vec<AttributeInstance>,
}

impl TypeGraphBuilder {
    /// Append a resolved type. Duplicate canonical names keep the first
    /// occurrence when the graph is built.
    pub fn ty(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.push(descriptor);
        self
    }

    /// Append an assembly-level attribute application.
    pub fn assembly_attribute(mut self, attribute: AttributeInstance) -> Self {
        self.assembly_attributes.push(attribute);
        self
    }

    pub fn build(self) -> TypeGraph {
        TypeGraph::from_parts(self.types, self.assembly_attributes)
    }
}

/// Fluent construction of a single [`TypeDescriptor`].
#[derive(Debug)]
pub struct TypeBuilder {
    descriptor: TypeDescriptor,
}

impl TypeBuilder {
    pub fn new(name: TypeName) -> Self {
        Self {
            descriptor: TypeDescriptor::new(name),
        }
    }

    /// Shorthand for a concrete, non-generic type.
    pub fn concrete(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(TypeName::new(namespace, name))
    }

    pub fn abstract_(mut self) -> Self {
        self.descriptor.is_abstract = true;
        self
    }

    pub fn base(mut self, base: TypeName) -> Self {
        self.descriptor.base_type = Some(base);
        self
    }

    /// Add one interface to the closure. Callers supply the closed form the
    /// type actually implements (`IBar<string>`, not `IBar<T>`).
    pub fn implements(mut self, interface: TypeName) -> Self {
        self.descriptor.interfaces.push(interface);
        self
    }

    pub fn constructor(mut self, constructor: ConstructorDescriptor) -> Self {
        self.descriptor.constructors.push(constructor);
        self
    }

    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.descriptor.methods.push(method);
        self
    }

    pub fn attribute(mut self, attribute: AttributeInstance) -> Self {
        self.descriptor.attributes.push(attribute);
        self
    }

    pub fn finish(self) -> TypeDescriptor {
        self.descriptor
    }
}
