//! Shared foundational types used across the Kite compiler.
//!
//! This crate provides interned identifiers for declaration and target-language
//! names, and the internal-error result type that separates compiler defects
//! from user-facing diagnostics.

#![warn(missing_docs)]

pub mod ident;
pub mod result;

pub use ident::{Ident, Interner};
pub use result::{InternalError, KiteResult};
