#![forbid(unsafe_code)]
//! Compile-time dependency-injection registration synthesizer
//!
//! wiregen turns declarative registration annotations plus a resolved
//! whole-program type graph into a deterministic sequence of abstract
//! container-registration instructions. The pipeline:
//!
//! ```text
//! TypeGraph → resolvers (registration, decoration, broadcast, factory,
//! extensions) → Sequencer → Vec<EmitOp> + diagnostics
//! ```
//!
//! The host compiler owns parsing and semantic analysis; wiregen consumes an
//! immutable [`graph::TypeGraph`] snapshot and produces [`emit::EmitOp`]
//! instructions that a separate back-end renders to source text. There is no
//! runtime container in here — only synthesis of the calls into one.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: use `Result` or `Option` with `?` / `ok_or` /
//!   `map_err`. Recoverable problems surface as [`diagnostics::Diagnostic`]
//!   values; only the structural-impossibility class is a hard
//!   [`engine::GenerateError`].
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: if a panic represents an engine bug, use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod diagnostics;
pub mod emit;
pub mod engine;
pub mod graph;
pub mod resolve;

pub use diagnostics::{Diagnostic, Severity};
pub use emit::EmitOp;
pub use engine::{Engine, EngineOptions, GenerateError, GenerationOutput};
pub use graph::{
    AttributeInstance, AttributeKind, Lifetime, TypeBuilder, TypeGraph, TypeGraphBuilder, TypeName,
};
pub use resolve::{
    BroadcastResolver, DecorationEntry, ExtensionMethod, FactoryDescriptor, FactoryParameter,
    RegistrationEntry,
};
