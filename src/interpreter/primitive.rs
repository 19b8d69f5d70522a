/// Primitive and modifier enums and their dispatch.
pub mod core;

/// Recursive elementwise application with scalar extension.
pub mod pervade;

/// Numeric and character arithmetic.
pub mod arithmetic;

/// Equality, ordering and structural matching.
pub mod comparison;

/// Shape-manipulating primitives: iota, length, shape, flat, pair,
/// catenate, reshape, select and pick.
pub mod structure;

/// Function-to-function transforms and the runtime behavior of the
/// functions they build.
pub mod modifier;

pub use self::core::{Modifier, Primitive};
