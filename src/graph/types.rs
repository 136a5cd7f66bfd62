//! Type descriptors for the resolved type graph
//!
//! These are the immutable nodes the resolvers query. They are built once per
//! compilation snapshot by the host adapter (see [`crate::graph::builder`])
//! and never mutated afterwards.

use std::fmt;

use crate::graph::attributes::{AttributeInstance, AttributeKind};

/// Canonical type identity: namespace, short name, generic shape.
///
/// A `TypeName` is either non-generic (`arity == 0`), an open generic
/// (`arity > 0`, no arguments) or a closed generic (`arity > 0` with one
/// argument per parameter). Identity is by canonical fully-qualified name,
/// so two independently constructed names for the same type compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    namespace: String,
    name: String,
    arity: usize,
    args: Vec<TypeName>,
}

impl TypeName {
    /// A non-generic type, e.g. `TypeName::new("App.Services", "UserService")`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            arity: 0,
            args: Vec::new(),
        }
    }

    /// A closed generic type; arity is taken from the argument count.
    pub fn generic(
        namespace: impl Into<String>,
        name: impl Into<String>,
        args: Vec<TypeName>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            arity: args.len(),
            args,
        }
    }

    /// An open generic type, e.g. `IRepository<>` with arity 1.
    pub fn open(namespace: impl Into<String>, name: impl Into<String>, arity: usize) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            arity,
            args: Vec::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Short name without namespace or generic arguments.
    pub fn short_name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn args(&self) -> &[TypeName] {
        &self.args
    }

    /// True for an open generic (generic parameters not yet substituted).
    pub fn is_open(&self) -> bool {
        self.arity > 0 && self.args.is_empty()
    }

    /// The generic definition: same namespace/name/arity, arguments erased.
    /// For non-generic types this is the identity.
    pub fn definition(&self) -> TypeName {
        TypeName {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            arity: self.arity,
            args: Vec::new(),
        }
    }

    /// Whether two names share a generic definition (`IService<string>` and
    /// `IService<>` do; `IService<>` and `IService<,>` do not).
    pub fn same_definition(&self, other: &TypeName) -> bool {
        self.namespace == other.namespace && self.name == other.name && self.arity == other.arity
    }

    /// Canonical fully-qualified rendering, used for identity comparisons.
    ///
    /// Open generics render with empty argument slots: `Ns.IDict<,>`.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)?;
        } else {
            write!(f, "{}.{}", self.namespace, self.name)?;
        }
        if self.arity == 0 {
            return Ok(());
        }
        write!(f, "<")?;
        if self.args.is_empty() {
            // Open generic: one comma per elided argument beyond the first.
            for _ in 1..self.arity {
                write!(f, ",")?;
            }
        } else {
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
        }
        write!(f, ">")
    }
}

/// Declared accessibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    Public,
    Internal,
    Protected,
    Private,
}

impl Accessibility {
    /// Public and internal members are reachable from generated code.
    pub fn is_reachable(self) -> bool {
        matches!(self, Accessibility::Public | Accessibility::Internal)
    }
}

/// An ordered constructor or method parameter with its attribute set.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_name: TypeName,
    pub attributes: Vec<AttributeInstance>,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, type_name: TypeName) -> Self {
        Self {
            name: name.into(),
            type_name,
            attributes: Vec::new(),
        }
    }

    /// Marks this parameter as supplied by the factory caller at runtime.
    pub fn runtime_argument(mut self) -> Self {
        self.attributes.push(AttributeInstance::runtime_argument());
        self
    }

    /// Whether the parameter carries the runtime-argument marker.
    pub fn is_runtime_argument(&self) -> bool {
        self.attributes
            .iter()
            .any(|a| a.kind == AttributeKind::RuntimeArgument)
    }
}

/// A declared constructor.
///
/// `is_implicit` marks compiler-synthesized default constructors; the query
/// layer filters those out.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDescriptor {
    pub parameters: Vec<ParameterDescriptor>,
    pub accessibility: Accessibility,
    pub is_static: bool,
    pub is_implicit: bool,
}

impl ConstructorDescriptor {
    pub fn new(parameters: Vec<ParameterDescriptor>) -> Self {
        Self {
            parameters,
            accessibility: Accessibility::Public,
            is_static: false,
            is_implicit: false,
        }
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }
}

/// A declared method, carried for extension-method validation.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    pub name: String,
    pub accessibility: Accessibility,
    pub is_static: bool,
    pub parameters: Vec<ParameterDescriptor>,
    pub attributes: Vec<AttributeInstance>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accessibility: Accessibility::Public,
            is_static: true,
            parameters: Vec::new(),
            attributes: Vec::new(),
        }
    }
}

/// A node in the type graph: one resolved type and everything the resolvers
/// may ask about it.
///
/// `interfaces` holds the transitive interface closure, each entry already
/// normalized to its closed form relative to this type (the host compiler
/// resolves generic substitution before the graph is built). `base_type` is
/// only the immediate base; the full chain is walked lazily through
/// [`crate::graph::TypeGraph::base_chain`].
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    pub name: TypeName,
    pub is_abstract: bool,
    pub base_type: Option<TypeName>,
    pub interfaces: Vec<TypeName>,
    pub constructors: Vec<ConstructorDescriptor>,
    pub methods: Vec<MethodDescriptor>,
    pub attributes: Vec<AttributeInstance>,
}

impl TypeDescriptor {
    pub fn new(name: TypeName) -> Self {
        Self {
            name,
            is_abstract: false,
            base_type: None,
            interfaces: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            attributes: Vec::new(),
        }
    }
}
