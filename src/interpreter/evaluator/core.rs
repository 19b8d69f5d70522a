use std::collections::HashMap;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::value::{
        core::{Array, Val},
        function::Function,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The binding environment.
///
/// Maps names to values. It is created by the host, passed by reference
/// into every evaluation and kept between submissions; the evaluator never
/// holds on to it. A binding is only installed once its value has evaluated
/// successfully, so a failing statement leaves the environment as it was.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Val>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a binding.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Val> {
        self.bindings.get(name)
    }

    /// Installs or replaces a binding.
    pub fn insert(&mut self, name: impl Into<String>, value: Val) {
        self.bindings.insert(name.into(), value);
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. Literals, references and
    /// glyphs evaluate directly; modifiers transform their evaluated operands;
    /// trains are resolved by arity (see [`Environment::eval_train`]).
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised anywhere in the tree.
    ///
    /// # Example
    /// ```
    /// use aplfix::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Environment, value::core::Val},
    /// };
    ///
    /// let mut env = Environment::new();
    /// let node = Node::Number { value: 4.0,
    ///                           line:  1, };
    ///
    /// assert_eq!(env.eval(&node).unwrap(), Val::Number(4.0));
    /// ```
    pub fn eval(&mut self, node: &Node) -> EvalResult<Val> {
        match node {
            Node::Number { value, .. } => Ok(Val::Number(*value)),
            Node::String { value, .. } => Ok(Val::Array(Array::string(value))),
            Node::Character { value, .. } => Ok(Val::Character(*value)),
            Node::Reference { name, line } => {
                self.get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Node::Glyph { primitive, .. } => Ok(Val::Function(Function::Primitive(*primitive))),
            Node::MonadicModifier { modifier,
                                    operand,
                                    line, } => {
                let operand = self.eval(operand)?;
                modifier.apply_monadic(&operand, *line)
            },
            Node::DyadicModifier { modifier,
                                   left,
                                   right,
                                   line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                modifier.apply_dyadic(&left, &right, *line)
            },
            Node::Binding { name,
                            arity,
                            value,
                            line, } => {
                let value = self.eval(value)?;
                if let Some(declared) = arity
                   && value.arity() != *declared
                {
                    return Err(RuntimeError::ArityMismatch { name:     name.clone(),
                                                             declared: declared.count(),
                                                             actual:   value.arity().count(),
                                                             line:     *line, });
                }
                self.insert(name.clone(), value.clone());
                Ok(value)
            },
            Node::Expression { tines, line } => self.eval_train(tines, *line),
            Node::Strand { elements, .. } | Node::ListLiteral { elements, .. } => self.eval_list(elements),
            Node::ArrayLiteral { elements, line } => self.eval_array_literal(elements, *line),
        }
    }

    /// Evaluates statements in order and returns the value of the last one.
    ///
    /// Returns `None` for an empty program.
    ///
    /// # Errors
    /// Stops at the first failing statement; bindings made by earlier
    /// statements stay installed.
    pub fn eval_program(&mut self, program: &[Node]) -> EvalResult<Option<Val>> {
        let mut result = None;
        for statement in program {
            result = Some(self.eval(statement)?);
        }
        Ok(result)
    }
}
