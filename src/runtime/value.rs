use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::runtime::EnvRef;

/// Signature of a host-provided native procedure
///
/// Natives receive the already-evaluated argument array and never own
/// language-level state.
pub type NativeFn = fn(&[Value]) -> Result<Value>;

/// Runtime value representation
///
/// Every datum in Hexa is a `Value`, including parsed source code: lists
/// serve both as the runtime list type and as the expression tree consumed
/// by the evaluator.
///
/// `Clone` is the copy operation: `String`/`Symbol`/`List` payloads are
/// duplicated with no aliasing, while a `Closure` clone shares its captured
/// environment (and its body, which is immutable once built) by bumping the
/// reference count.
#[derive(Clone)]
pub enum Value {
    /// Nil value
    Nil,
    /// Boolean value
    Bool(bool),
    /// 64-bit floating-point value
    Number(f64),
    /// String value (owns its character data; equality is by content)
    String(String),
    /// Symbol naming a variable or special form
    Symbol(String),
    /// Ordered sequence of values (owns its elements)
    List(Vec<Value>),
    /// User-defined function value (closure)
    Closure {
        /// Parameter names; arity is their count
        params: Vec<String>,
        /// Body expressions, evaluated in sequence (reference-counted)
        body: Rc<Vec<Value>>,
        /// Environment captured at definition time (lexical capture)
        env: EnvRef,
    },
    /// Host-provided primitive
    Native {
        /// Host function to invoke
        func: NativeFn,
        /// Name the primitive is installed under
        name: &'static str,
    },
}

impl Value {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Closure { .. } => "closure",
            Value::Native { .. } => "native",
        }
    }

    /// Returns true if the value is truthy in a conditional
    ///
    /// Booleans use their value and a number is false iff exactly zero.
    /// Every other type is true, including empty strings and empty lists.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            _ => true,
        }
    }

    /// Returns the closure's parameter count, if this is a closure
    pub fn arity(&self) -> Option<usize> {
        match self {
            Value::Closure { params, .. } => Some(params.len()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Closure { params, body, .. } => {
                write!(f, "[fn [")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, "]")?;
                for expr in body.iter() {
                    write!(f, " {}", expr)?;
                }
                write!(f, "]")
            }
            Value::Native { name, .. } => write!(f, "[native-fn {}]", name),
        }
    }
}

// Manual Debug: rendering the captured environment would walk the whole
// scope chain, which may contain cycles through recursive closures.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Number(n) => write!(f, "Number({})", n),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Symbol(s) => write!(f, "Symbol({:?})", s),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Closure { params, body, .. } => f
                .debug_struct("Closure")
                .field("params", params)
                .field("body", body)
                .finish_non_exhaustive(),
            Value::Native { name, .. } => write!(f, "Native({})", name),
        }
    }
}

// Structural equality for data; closures and natives compare by identity
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Closure { body: a, .. }, Value::Closure { body: b, .. }) => Rc::ptr_eq(a, b),
            (Value::Native { func: a, .. }, Value::Native { func: b, .. }) => {
                std::ptr::eq(*a as *const (), *b as *const ())
            }
            _ => false,
        }
    }
}
