use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::FuncBody,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::strings::{StrId, StrTable},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations. The set is
/// closed; user code cannot define new types.
///
/// `Value` deliberately does not implement `PartialEq`: equality in the
/// language is typed (comparing a boolean to a list is an error, functions
/// compare by identity), so it is exposed as the fallible [`Value::eq_value`]
/// instead.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point). The language has a
    /// single numeric type; division by zero follows IEEE rules and produces
    /// infinities or NaN rather than an error.
    Number(f64),
    /// An immutable, interned string. The id resolves through the
    /// interpreter's [`StrTable`]; equal text always yields an equal id.
    Str(StrId),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) or logical
    /// operations (`and`, `or`, `not`). Conditions in `if`, `while`, and the
    /// ternary operator must evaluate to `Bool`.
    Bool(bool),
    /// A single character, distinct from a one-character string. Chars coerce
    /// to their code point in arithmetic and numeric comparisons.
    Char(char),
    /// An ordered, heterogeneous list with reference semantics: assignment
    /// and argument passing alias the same shared storage. Use the `clone`
    /// intrinsic for an independent deep copy.
    List(Rc<RefCell<Vec<Self>>>),
    /// A function value (closure). Two function values are equal exactly when
    /// they share the same underlying body node.
    Function(Rc<FuncBody>),
    /// The absence of a value; its own type, produced by functions that end
    /// without `return`. All `none`s are equal.
    None,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<StrId> for Value {
    fn from(v: StrId) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(v)))
    }
}

impl From<Rc<FuncBody>> for Value {
    fn from(v: Rc<FuncBody>) -> Self {
        Self::Function(v)
    }
}

impl Value {
    /// Returns the name of this value's type, as used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Char(_) => "char",
            Self::List(_) => "list",
            Self::Function(_) => "function",
            Self::None => "none",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Number` directly and coerces `Value::Char` to its code
    /// point, matching the coercion the arithmetic operators apply.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number or a char.
    /// - `Err(RuntimeError::TypeMismatch)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// let x = Value::Char('a');
    /// let n = x.as_number(42).unwrap();
    ///
    /// assert_eq!(n, 97.0);
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Char(c) => Ok(f64::from(u32::from(*c))),
            _ => Err(self.type_mismatch("number or char", line)),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions and for the logical operators; nothing else
    /// coerces to boolean.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::TypeMismatch)`: If not boolean.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.type_mismatch("boolean", line)),
        }
    }

    /// Converts the value to `char`, or returns an error if not a char.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(char)`: The character.
    /// - `Err(RuntimeError::TypeMismatch)`: If not a char.
    pub fn as_char(&self, line: usize) -> EvalResult<char> {
        match self {
            Self::Char(c) => Ok(*c),
            _ => Err(self.type_mismatch("char", line)),
        }
    }

    /// Returns the interned id of a string value, or an error if the value is
    /// not a string.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(StrId)`: The interned string id.
    /// - `Err(RuntimeError::TypeMismatch)`: If not a string.
    pub fn as_string(&self, line: usize) -> EvalResult<StrId> {
        match self {
            Self::Str(id) => Ok(*id),
            _ => Err(self.type_mismatch("string", line)),
        }
    }

    /// Returns a handle to the shared storage of a list value, or an error if
    /// the value is not a list.
    ///
    /// The returned handle aliases the list; mutations through it are visible
    /// to every other value holding the same list.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Rc<RefCell<Vec<Value>>>)`: The shared storage.
    /// - `Err(RuntimeError::TypeMismatch)`: If not a list.
    pub fn as_list(&self, line: usize) -> EvalResult<Rc<RefCell<Vec<Self>>>> {
        match self {
            Self::List(items) => Ok(Rc::clone(items)),
            _ => Err(self.type_mismatch("list", line)),
        }
    }

    /// Returns the body node of a function value, or an error if the value is
    /// not a function.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Rc<FuncBody>)`: The shared function body.
    /// - `Err(RuntimeError::TypeMismatch)`: If not a function.
    pub fn as_function(&self, line: usize) -> EvalResult<Rc<FuncBody>> {
        match self {
            Self::Function(func) => Ok(Rc::clone(func)),
            _ => Err(self.type_mismatch("function", line)),
        }
    }

    /// Returns `true` if the value is a string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::Str(..))
    }

    /// Returns `true` if the value is a list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }

    /// Produces a value independent of `self`.
    ///
    /// Lists are copied recursively into fresh storage; every other variant
    /// is cheap to clone and is returned as-is. Function values stay shared,
    /// so a deep-copied closure still compares equal to the original.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// let original = Value::from(vec![Value::from(1.0), Value::from(2.0)]);
    /// let copy = original.deep_copy();
    ///
    /// let Value::List(items) = &original else { unreachable!() };
    /// items.borrow_mut().push(Value::from(3.0));
    ///
    /// assert!(matches!(&copy, Value::List(c) if c.borrow().len() == 2));
    /// ```
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        match self {
            Self::List(items) => {
                let copied: Vec<Self> = items.borrow().iter().map(Self::deep_copy).collect();
                copied.into()
            },
            _ => self.clone(),
        }
    }

    /// Structural equality as defined by the language.
    ///
    /// Numbers and chars compare by numeric value, strings by interned id,
    /// booleans by value, lists recursively (with a length short-circuit),
    /// functions by identity, and `none` equals `none`. Every other
    /// combination of types is a type error rather than `false`.
    ///
    /// # Parameters
    /// - `other`: The value to compare against.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: Whether the values are equal.
    /// - `Err(RuntimeError::TypeMismatch)`: If the types cannot be compared.
    pub fn eq_value(&self, other: &Self, line: usize) -> EvalResult<bool> {
        match (self, other) {
            (Self::Number(_) | Self::Char(_), Self::Number(_) | Self::Char(_)) => {
                Ok(self.as_number(line)? == other.as_number(line)?)
            },
            (Self::Str(a), Self::Str(b)) => Ok(a == b),
            (Self::Bool(a), Self::Bool(b)) => Ok(a == b),

            (Self::List(a), Self::List(b)) => {
                if Rc::ptr_eq(a, b) {
                    return Ok(true);
                }

                let (a, b) = (a.borrow(), b.borrow());
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (x, y) in a.iter().zip(b.iter()) {
                    if !x.eq_value(y, line)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            },

            (Self::Function(a), Self::Function(b)) => Ok(Rc::ptr_eq(a, b)),
            (Self::None, Self::None) => Ok(true),

            _ => Err(RuntimeError::TypeMismatch {
                expected: self.kind_name().to_string(),
                found: other.kind_name().to_string(),
                line,
            }),
        }
    }

    /// Renders the value as the host-facing text form.
    ///
    /// This is what `print`, `tostr`, and string concatenation produce.
    /// `Value` cannot implement `Display` directly because string contents
    /// live in the interpreter's table, so rendering takes the table.
    #[must_use]
    pub fn render(&self, strings: &StrTable) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Str(id) => strings.resolve(*id).to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Char(c) => c.to_string(),

            Self::List(items) => {
                let mut out = String::from("[");
                for (index, value) in items.borrow().iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&value.render(strings));
                }
                out.push(']');
                out
            },

            Self::Function(func) => format!("<func({})>", func.params.len()),
            Self::None => "none".to_string(),
        }
    }

    fn type_mismatch(&self, expected: &str, line: usize) -> RuntimeError {
        RuntimeError::TypeMismatch {
            expected: expected.to_string(),
            found: self.kind_name().to_string(),
            line,
        }
    }
}
