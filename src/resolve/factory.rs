//! Factory synthesis
//!
//! A registered type whose constructor takes runtime-supplied arguments gets
//! a generated factory pair: an interface with a single `Create` method
//! shaped like the runtime arguments, and an implementation that resolves
//! the remaining constructor parameters from the container. The factory
//! interface itself is registered as a Singleton alongside.

use crate::engine::GenerateError;
use crate::graph::{ConstructorDescriptor, TypeDescriptor, TypeGraph, TypeName};
use crate::resolve::registration::RegistrationEntry;

/// One runtime-supplied parameter of the generated `Create` method.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryParameter {
    pub name: String,
    pub type_name: TypeName,
}

/// Descriptor of one generated factory pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryDescriptor {
    pub interface_name: String,
    pub implementation_name: String,
    pub namespace: String,
    /// What `Create` returns: the registered service type, else the
    /// implementation itself.
    pub return_type: TypeName,
    /// Runtime arguments in original constructor-declaration order.
    pub parameters: Vec<FactoryParameter>,
    /// The concrete type the factory constructs.
    pub backing_implementation: TypeName,
}

impl FactoryDescriptor {
    /// Canonical name of the generated factory interface.
    pub fn interface_type(&self) -> TypeName {
        TypeName::new(self.namespace.clone(), self.interface_name.clone())
    }

    /// Canonical name of the generated factory implementation.
    pub fn implementation_type(&self) -> TypeName {
        TypeName::new(self.namespace.clone(), self.implementation_name.clone())
    }
}

/// Synthesize a factory for `ty` registered as `entry`.
///
/// Returns `Ok(None)` when no constructor qualifies — not an error. The only
/// failure is the structural one: no namespace can be determined for the
/// generated pair.
pub fn synthesize(
    graph: &TypeGraph,
    ty: &TypeDescriptor,
    entry: &RegistrationEntry,
    fallback_namespace: Option<&str>,
) -> Result<Option<FactoryDescriptor>, GenerateError> {
    let Some(constructor) = select_constructor(graph, ty) else {
        return Ok(None);
    };

    let namespace = if ty.name.namespace().is_empty() {
        fallback_namespace.unwrap_or("")
    } else {
        ty.name.namespace()
    };
    if namespace.is_empty() {
        return Err(GenerateError::UndeterminedNamespace {
            type_name: ty.name.canonical(),
        });
    }

    // The interface is named after the registered service when there is
    // one; the implementation is always named after the backing type.
    let implementation_base = base_name(&ty.name);
    let service_base = entry
        .service_type
        .as_ref()
        .map(base_name)
        .unwrap_or_else(|| implementation_base.clone());
    let parameters = constructor
        .parameters
        .iter()
        .filter(|p| p.is_runtime_argument())
        .map(|p| FactoryParameter {
            name: p.name.clone(),
            type_name: p.type_name.clone(),
        })
        .collect();

    Ok(Some(FactoryDescriptor {
        interface_name: ensure_interface_prefix(&service_base) + "Factory",
        implementation_name: trim_interface_prefix(&implementation_base).to_string() + "Factory",
        namespace: namespace.to_string(),
        return_type: entry
            .service_type
            .clone()
            .unwrap_or_else(|| entry.implementation_type.clone()),
        parameters,
        backing_implementation: entry.implementation_type.clone(),
    }))
}

/// Pick the constructor exposing the factory shape: among accessible,
/// non-static instance constructors with at least one runtime-argument
/// parameter, the one with the most runtime arguments wins; ties break to
/// the greatest total parameter count; remaining ties keep declaration
/// order.
fn select_constructor<'t>(
    graph: &TypeGraph,
    ty: &'t TypeDescriptor,
) -> Option<&'t ConstructorDescriptor> {
    let mut best: Option<(&ConstructorDescriptor, usize)> = None;
    for constructor in graph.constructors(ty) {
        if constructor.is_static || !constructor.accessibility.is_reachable() {
            continue;
        }
        let marked = constructor
            .parameters
            .iter()
            .filter(|p| p.is_runtime_argument())
            .count();
        if marked == 0 {
            continue;
        }
        let better = match best {
            None => true,
            Some((current, current_marked)) => {
                marked > current_marked
                    || (marked == current_marked
                        && constructor.parameters.len() > current.parameters.len())
            }
        };
        if better {
            best = Some((constructor, marked));
        }
    }
    best.map(|(constructor, _)| constructor)
}

/// Base identifier for generated names. A closed generic encodes its type
/// arguments so identifiers stay unique and valid: `Foo<string>` becomes
/// `FooOfString`, `Pair<A, B>` becomes `PairOfAAndB`.
fn base_name(name: &TypeName) -> String {
    let mut out = name.short_name().to_string();
    if !name.args().is_empty() {
        out.push_str("Of");
        let encoded: Vec<String> = name
            .args()
            .iter()
            .map(|arg| capitalize(&base_name(arg)))
            .collect();
        out.push_str(&encoded.join("And"));
    }
    out
}

/// Built-in aliases like `string` start lowercase; generated identifiers
/// keep every segment in pascal case.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// `Foo` stays `Foo`; `IFoo` (capital after the `I`) already counts as
/// carrying the prefix, so no double `II` is produced.
fn has_interface_prefix(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('I') && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

fn ensure_interface_prefix(name: &str) -> String {
    if has_interface_prefix(name) {
        name.to_string()
    } else {
        format!("I{name}")
    }
}

fn trim_interface_prefix(name: &str) -> &str {
    if has_interface_prefix(name) {
        &name[1..]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{
        Accessibility, AttributeInstance, ConstructorDescriptor, Lifetime, ParameterDescriptor,
        TypeBuilder, TypeGraph,
    };

    fn entry_for(ty: &TypeDescriptor) -> RegistrationEntry {
        RegistrationEntry {
            service_type: None,
            implementation_type: ty.name.clone(),
            lifetime: Lifetime::Transient,
            service_name: None,
            include_factory: true,
        }
    }

    fn marked(name: &str) -> ParameterDescriptor {
        ParameterDescriptor::new(name, TypeName::new("", "string")).runtime_argument()
    }

    fn unmarked(name: &str) -> ParameterDescriptor {
        ParameterDescriptor::new(name, TypeName::new("App", "IDependency"))
    }

    #[test]
    fn no_qualifying_constructor_is_silent() {
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "Plain")
                .constructor(ConstructorDescriptor::new(vec![unmarked("dep")]))
                .finish())
            .build();
        let ty = &graph.types()[0];
        let result = synthesize(&graph, ty, &entry_for(ty), None).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn most_runtime_arguments_wins_regardless_of_total() {
        // 1 marked + 2 unmarked vs 2 marked + 0 unmarked: the 2-marked
        // constructor must win.
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "Widget")
                .constructor(ConstructorDescriptor::new(vec![
                    marked("id"),
                    unmarked("a"),
                    unmarked("b"),
                ]))
                .constructor(ConstructorDescriptor::new(vec![marked("id"), marked("label")]))
                .finish())
            .build();
        let ty = &graph.types()[0];
        let factory = synthesize(&graph, ty, &entry_for(ty), None).unwrap().unwrap();
        let names: Vec<&str> = factory.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id", "label"]);
    }

    #[test]
    fn marked_tie_breaks_to_greatest_total_parameter_count() {
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "Widget")
                .constructor(ConstructorDescriptor::new(vec![marked("id")]))
                .constructor(ConstructorDescriptor::new(vec![marked("key"), unmarked("dep")]))
                .finish())
            .build();
        let ty = &graph.types()[0];
        let factory = synthesize(&graph, ty, &entry_for(ty), None).unwrap().unwrap();
        assert_eq!(factory.parameters[0].name, "key");
    }

    #[test]
    fn inaccessible_and_static_constructors_are_ignored() {
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "Widget")
                .constructor(
                    ConstructorDescriptor::new(vec![marked("secret"), marked("other")])
                        .with_accessibility(Accessibility::Private),
                )
                .constructor(ConstructorDescriptor::new(vec![marked("id")]))
                .finish())
            .build();
        let ty = &graph.types()[0];
        let factory = synthesize(&graph, ty, &entry_for(ty), None).unwrap().unwrap();
        assert_eq!(factory.parameters[0].name, "id");
    }

    #[test]
    fn interface_is_named_after_the_registered_service() {
        // MyImpl registered under IWidget: the interface takes the service's
        // base name, the implementation keeps the type's.
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "MyImpl")
                .implements(TypeName::new("App", "IWidget"))
                .constructor(ConstructorDescriptor::new(vec![marked("id")]))
                .finish())
            .build();
        let ty = &graph.types()[0];
        let entry = RegistrationEntry {
            service_type: Some(TypeName::new("App", "IWidget")),
            ..entry_for(ty)
        };
        let factory = synthesize(&graph, ty, &entry, None).unwrap().unwrap();
        assert_eq!(factory.interface_name, "IWidgetFactory");
        assert_eq!(factory.implementation_name, "MyImplFactory");
    }

    #[test]
    fn interface_prefix_is_never_doubled() {
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "IFoo")
                .constructor(ConstructorDescriptor::new(vec![marked("id")]))
                .finish())
            .build();
        let ty = &graph.types()[0];
        let factory = synthesize(&graph, ty, &entry_for(ty), None).unwrap().unwrap();
        assert_eq!(factory.interface_name, "IFooFactory");
        assert_eq!(factory.implementation_name, "FooFactory");
    }

    #[test]
    fn closed_generic_names_encode_their_arguments() {
        let name = TypeName::generic("App", "Foo", vec![TypeName::new("", "string")]);
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::new(name)
                .constructor(ConstructorDescriptor::new(vec![marked("id")]))
                .finish())
            .build();
        let ty = &graph.types()[0];
        let factory = synthesize(&graph, ty, &entry_for(ty), None).unwrap().unwrap();
        assert_eq!(factory.interface_name, "IFooOfStringFactory");
        assert_eq!(factory.implementation_name, "FooOfStringFactory");
    }

    #[test]
    fn missing_namespace_uses_fallback_then_fails_hard() {
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("", "Rootless")
                .constructor(ConstructorDescriptor::new(vec![marked("id")]))
                .finish())
            .build();
        let ty = &graph.types()[0];

        let with_fallback = synthesize(&graph, ty, &entry_for(ty), Some("App.Generated"))
            .unwrap()
            .unwrap();
        assert_eq!(with_fallback.namespace, "App.Generated");

        let err = synthesize(&graph, ty, &entry_for(ty), None).unwrap_err();
        assert!(matches!(err, GenerateError::UndeterminedNamespace { .. }));
    }

    #[test]
    fn return_type_prefers_the_registered_service() {
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "Service")
                .implements(TypeName::new("App", "IService"))
                .attribute(AttributeInstance::register())
                .constructor(ConstructorDescriptor::new(vec![marked("id")]))
                .finish())
            .build();
        let ty = &graph.types()[0];
        let entry = RegistrationEntry {
            service_type: Some(TypeName::new("App", "IService")),
            ..entry_for(ty)
        };
        let factory = synthesize(&graph, ty, &entry, None).unwrap().unwrap();
        assert_eq!(factory.return_type, TypeName::new("App", "IService"));
        assert_eq!(factory.backing_implementation, TypeName::new("App", "Service"));
    }

    #[test]
    fn marked_case_two_beats_one() {
        // A constructor with 2 marked parameters wins over a 1-marked
        // constructor even when the latter has more parameters in total.
        let graph = TypeGraph::builder()
            .ty(TypeBuilder::concrete("App", "Report")
                .constructor(ConstructorDescriptor::new(vec![
                    marked("title"),
                    unmarked("a"),
                    unmarked("b"),
                    unmarked("c"),
                ]))
                .constructor(ConstructorDescriptor::new(vec![marked("title"), marked("owner")]))
                .finish())
            .build();
        let ty = &graph.types()[0];
        let factory = synthesize(&graph, ty, &entry_for(ty), None).unwrap().unwrap();
        assert_eq!(factory.parameters.len(), 2);
    }
}
