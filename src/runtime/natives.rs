//! Host-provided native procedures
//!
//! A fixed table of primitives installed into the global environment at
//! startup. Natives are invoked with the already-evaluated argument array
//! and share the calling convention of user closures, but no call frame is
//! created for them.

use crate::error::{Error, Result};
use crate::runtime::{EnvRef, Value};

/// Installs every native procedure into the given environment
pub fn install(env: &EnvRef) {
    let mut env = env.borrow_mut();
    let table: &[(&'static str, crate::runtime::NativeFn)] = &[
        ("print", native_print),
        ("+", native_add),
        ("-", native_subtract),
        ("*", native_multiply),
        ("/", native_divide),
        ("=", native_equal),
        ("<", native_less_than),
        (">", native_greater_than),
    ];

    for &(name, func) in table {
        env.define(name.to_string(), Value::Native { func, name });
    }
}

/// Variadic: prints each argument space-separated, then a newline
fn native_print(args: &[Value]) -> Result<Value> {
    let rendered: Vec<String> = args.iter().map(Value::to_string).collect();
    println!("{}", rendered.join(" "));
    Ok(Value::Nil)
}

fn expect_two(args: &[Value]) -> Result<()> {
    if args.len() != 2 {
        return Err(Error::ArityMismatch {
            expected: 2,
            got: args.len(),
        });
    }
    Ok(())
}

fn as_number(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(Error::TypeError {
            expected: "number".to_string(),
            got: other.type_name().to_string(),
        }),
    }
}

fn native_add(args: &[Value]) -> Result<Value> {
    expect_two(args)?;
    Ok(Value::Number(as_number(&args[0])? + as_number(&args[1])?))
}

fn native_subtract(args: &[Value]) -> Result<Value> {
    expect_two(args)?;
    Ok(Value::Number(as_number(&args[0])? - as_number(&args[1])?))
}

fn native_multiply(args: &[Value]) -> Result<Value> {
    expect_two(args)?;
    Ok(Value::Number(as_number(&args[0])? * as_number(&args[1])?))
}

fn native_divide(args: &[Value]) -> Result<Value> {
    expect_two(args)?;
    let dividend = as_number(&args[0])?;
    let divisor = as_number(&args[1])?;
    if divisor == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(Value::Number(dividend / divisor))
}

/// Structural equality over all data types; closures and natives compare
/// by identity
fn native_equal(args: &[Value]) -> Result<Value> {
    expect_two(args)?;
    Ok(Value::Bool(args[0] == args[1]))
}

fn native_less_than(args: &[Value]) -> Result<Value> {
    expect_two(args)?;
    Ok(Value::Bool(as_number(&args[0])? < as_number(&args[1])?))
}

fn native_greater_than(args: &[Value]) -> Result<Value> {
    expect_two(args)?;
    Ok(Value::Bool(as_number(&args[0])? > as_number(&args[1])?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Environment;

    #[test]
    fn test_install_populates_globals() {
        let env = Environment::new();
        install(&env);

        for name in ["print", "+", "-", "*", "/", "=", "<", ">"] {
            assert!(env.borrow().exists(name), "missing native {}", name);
        }
    }

    #[test]
    fn test_arithmetic() {
        let one_two = [Value::Number(1.0), Value::Number(2.0)];

        assert_eq!(native_add(&one_two).unwrap(), Value::Number(3.0));
        assert_eq!(native_subtract(&one_two).unwrap(), Value::Number(-1.0));
        assert_eq!(native_multiply(&one_two).unwrap(), Value::Number(2.0));
        assert_eq!(native_divide(&one_two).unwrap(), Value::Number(0.5));
    }

    #[test]
    fn test_division_by_zero() {
        let args = [Value::Number(1.0), Value::Number(0.0)];

        assert_eq!(native_divide(&args), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_arity_is_checked() {
        let args = [Value::Number(1.0)];

        assert_eq!(
            native_add(&args),
            Err(Error::ArityMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_non_number_operand() {
        let args = [Value::Number(1.0), Value::String("a".to_string())];

        assert_eq!(
            native_add(&args),
            Err(Error::TypeError {
                expected: "number".to_string(),
                got: "string".to_string()
            })
        );
    }

    #[test]
    fn test_equality_is_structural() {
        let lists = [
            Value::List(vec![Value::Number(1.0), Value::Nil]),
            Value::List(vec![Value::Number(1.0), Value::Nil]),
        ];
        assert_eq!(native_equal(&lists).unwrap(), Value::Bool(true));

        let mixed = [Value::Number(1.0), Value::String("1".to_string())];
        assert_eq!(native_equal(&mixed).unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_ordering() {
        let args = [Value::Number(1.0), Value::Number(2.0)];

        assert_eq!(native_less_than(&args).unwrap(), Value::Bool(true));
        assert_eq!(native_greater_than(&args).unwrap(), Value::Bool(false));

        let bad = [Value::Bool(true), Value::Number(2.0)];
        assert!(matches!(
            native_less_than(&bad),
            Err(Error::TypeError { .. })
        ));
    }
}
