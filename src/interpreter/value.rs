/// Core value types.
///
/// Defines `Val`, the runtime value, and `Array`, the shape-checked
/// multi-dimensional container with cell decomposition.
pub mod core;
/// Rendering of values as text.
///
/// Implements `Display` for `Val`; the rendering never fails.
pub mod display;
/// First-class function values.
///
/// Defines the `Function` descriptor built by glyphs, modifiers and train
/// resolution, together with arity computation and calling.
pub mod function;
