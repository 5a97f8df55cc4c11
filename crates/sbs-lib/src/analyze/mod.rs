//! Schema evaluation: modules in, type graph out.
//!
//! Generic declarations are instantiated by substitution. Each distinct
//! (declaration, arguments) pair gets one synthesized graph entry, memoized
//! before its body is evaluated so recursive instantiation chains close on
//! themselves instead of expanding forever.

mod error;
mod evaluator;


pub use error::SchemaError;
pub use evaluator::{
    DEFAULT_INSTANTIATION_FUEL, DEFAULT_INSTANTIATION_SIZE, EvalFuel, evaluate, evaluate_with_fuel,
};
