//! Resolved attribute applications
//!
//! The host compiler reads raw attribute syntax once and hands the resolvers
//! this typed form. Generic attribute forms (`Register<TService>`) and the
//! non-generic `ServiceType` property collapse into the single
//! [`AttributeInstance::service_type`] field; the two spellings are
//! semantically interchangeable.

use std::fmt;

use crate::graph::types::TypeName;

/// The attribute kinds the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Class-level registration request (AllowMultiple).
    Register,
    /// Assembly-level "register all implementors" directive (AllowMultiple).
    RegisterAll,
    /// Class-level decorator declaration.
    Decorate,
    /// Static-method marker: invoke during the generated composition step.
    RegistrationExtension,
    /// Constructor-parameter marker: supplied by the factory caller.
    RuntimeArgument,
}

/// Service lifetime requested for a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifetime {
    #[default]
    Transient,
    Scoped,
    Singleton,
}

impl Lifetime {
    /// Lowercase keyword used in emitted registration calls.
    pub fn keyword(self) -> &'static str {
        match self {
            Lifetime::Transient => "transient",
            Lifetime::Scoped => "scoped",
            Lifetime::Singleton => "singleton",
        }
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifetime::Transient => write!(f, "Transient"),
            Lifetime::Scoped => write!(f, "Scoped"),
            Lifetime::Singleton => write!(f, "Singleton"),
        }
    }
}

/// One resolved attribute application with its named-property overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeInstance {
    pub kind: AttributeKind,
    /// Explicit service type from the generic argument or `ServiceType`
    /// property. `None` means "infer from the annotated type".
    pub service_type: Option<TypeName>,
    pub lifetime: Option<Lifetime>,
    pub service_name: Option<String>,
    pub include_factory: bool,
    pub include_service_name: bool,
}

impl AttributeInstance {
    fn bare(kind: AttributeKind) -> Self {
        Self {
            kind,
            service_type: None,
            lifetime: None,
            service_name: None,
            include_factory: false,
            include_service_name: false,
        }
    }

    /// An unqualified `Register` application.
    pub fn register() -> Self {
        Self::bare(AttributeKind::Register)
    }

    /// An assembly-level `RegisterAll` directive targeting `service_type`.
    pub fn register_all(service_type: TypeName) -> Self {
        Self {
            service_type: Some(service_type),
            ..Self::bare(AttributeKind::RegisterAll)
        }
    }

    /// An unqualified `Decorate` application.
    pub fn decorate() -> Self {
        Self::bare(AttributeKind::Decorate)
    }

    /// The registration-extension-method marker.
    pub fn registration_extension() -> Self {
        Self::bare(AttributeKind::RegistrationExtension)
    }

    /// The runtime-argument constructor-parameter marker.
    pub fn runtime_argument() -> Self {
        Self::bare(AttributeKind::RuntimeArgument)
    }

    pub fn with_service_type(mut self, service_type: TypeName) -> Self {
        self.service_type = Some(service_type);
        self
    }

    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn with_include_factory(mut self) -> Self {
        self.include_factory = true;
        self
    }

    pub fn with_include_service_name(mut self) -> Self {
        self.include_service_name = true;
        self
    }
}
