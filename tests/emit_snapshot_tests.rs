//! Golden snapshot tests for the emitted instruction script
//!
//! These pin the exact instruction sequence generated for representative
//! snapshots, so any change to resolution order or rendering is reviewed
//! and intentional.
//!
//! Run with: `cargo test --test emit_snapshot_tests`
//! Review changes: `cargo insta review`

use wiregen::graph::{
    AttributeInstance, ConstructorDescriptor, Lifetime, MethodDescriptor, ParameterDescriptor,
    TypeBuilder, TypeGraph, TypeName,
};
use wiregen::{Engine, EngineOptions};

fn options() -> EngineOptions {
    EngineOptions::new(TypeName::new("Container.Abstractions", "IServiceCollection"))
}

/// A snapshot exercising every resolver at once: plain and keyed
/// registrations, a decorator, a user extension, a generated factory and a
/// broadcast over an open generic.
fn shop_graph() -> TypeGraph {
    let mut payments = MethodDescriptor::new("AddPayments");
    payments
        .attributes
        .push(AttributeInstance::registration_extension());
    payments.parameters.push(ParameterDescriptor::new(
        "services",
        TypeName::new("Container.Abstractions", "IServiceCollection"),
    ));

    TypeGraph::builder()
        .ty(TypeBuilder::concrete("Shop", "CatalogService")
            .implements(TypeName::new("Shop", "ICatalogService"))
            .attribute(AttributeInstance::register())
            .finish())
        .ty(TypeBuilder::concrete("Shop", "Cache")
            .attribute(
                AttributeInstance::register()
                    .with_lifetime(Lifetime::Singleton)
                    .with_service_name("mem"),
            )
            .finish())
        .ty(TypeBuilder::concrete("Shop", "LoggingCatalog")
            .implements(TypeName::new("Shop", "ICatalogService"))
            .attribute(AttributeInstance::decorate())
            .finish())
        .ty(TypeBuilder::concrete("Shop", "Extensions").method(payments).finish())
        .ty(TypeBuilder::concrete("Shop", "Order")
            .attribute(AttributeInstance::register())
            .constructor(ConstructorDescriptor::new(vec![
                ParameterDescriptor::new("id", TypeName::new("", "string")).runtime_argument(),
                ParameterDescriptor::new("repo", TypeName::new("Shop", "IRepo")),
            ]))
            .finish())
        .ty(TypeBuilder::concrete("Shop", "UserRepository")
            .implements(TypeName::generic(
                "Shop",
                "IRepository",
                vec![TypeName::new("Shop", "User")],
            ))
            .finish())
        .ty(TypeBuilder::concrete("Shop", "OrderRepository")
            .implements(TypeName::generic(
                "Shop",
                "IRepository",
                vec![TypeName::new("Shop", "Order")],
            ))
            .finish())
        .assembly_attribute(AttributeInstance::register_all(TypeName::open(
            "Shop",
            "IRepository",
            1,
        )))
        .build()
}

#[test]
fn composition_script() {
    let graph = shop_graph();
    let output = Engine::new(&graph, options()).generate().unwrap();
    assert!(output.diagnostics.is_empty());
    let script = output.script();
    insta::assert_snapshot!("composition_script", script);
}

#[test]
fn broadcast_with_hook() {
    let graph = TypeGraph::builder()
        .ty(TypeBuilder::concrete("App", "Worker")
            .implements(TypeName::new("App", "IWorker"))
            .finish())
        .assembly_attribute(
            AttributeInstance::register_all(TypeName::new("App", "IWorker"))
                .with_lifetime(Lifetime::Scoped)
                .with_include_service_name(),
        )
        .build();
    let output = Engine::new(&graph, options().with_user_defined_composition())
        .generate()
        .unwrap();
    let script = output.script();
    insta::assert_snapshot!("broadcast_with_hook", script);
}
