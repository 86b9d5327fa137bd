//! Typed diagnostic factories, the process-wide diagnostic registry, and
//! rendering.
//!
//! Every kind of diagnostic is declared once as a `static`
//! [`DiagnosticFactory`] whose type parameter is the tuple of its parameter
//! types, so passing the wrong arguments is a compile error:
//!
//! ```ignore
//! kite_diagnostics::diagnostic_factories! {
//!     pub static NAME_CLASH: (String) = Error at positioning::DECLARATION_NAME;
//! }
//!
//! sink.emit(NAME_CLASH.on(decl, "foo"));
//! ```
//!
//! Factories are grouped into [`DiagnosticCatalog`]s together with their
//! message templates. A [`DiagnosticRegistry`] is built once from an explicit
//! list of catalogs; building it checks that names are unique and that every
//! template agrees with its factory's parameters. After that the registry is
//! read-only and renders [`Diagnostic`] values into [`RenderedDiagnostic`]s,
//! which a [`DiagnosticRenderer`] formats for a terminal or as JSON.

#![warn(missing_docs)]

pub mod catalog;
pub mod diagnostic;
pub mod factory;
pub mod filter;
pub mod params;
pub mod positioning;
pub mod registry;
pub mod renderer;
pub mod severity;
pub mod sink;
pub mod template;

pub use catalog::DiagnosticCatalog;
pub use diagnostic::{Diagnostic, RenderedDiagnostic};
pub use factory::{DiagnosticFactory, DiagnosticKind, FactoryDescriptor, ParameterMismatch};
pub use filter::DiagnosticFilter;
pub use params::{DiagnosticArg, DiagnosticParam, DiagnosticParams, ParamKind};
pub use positioning::PositioningStrategy;
pub use registry::{
    CatalogEntry, DiagnosticRegistry, GlobalRegistry, InstantiateError, RegisteredFactory,
    RegistryBuilder, RegistryError,
};
pub use renderer::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};
pub use severity::{ParseSeverityError, Severity};
pub use sink::DiagnosticSink;
pub use template::{MessageTemplate, TemplateError};
