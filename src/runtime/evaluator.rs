use std::rc::Rc;

use crate::error::{Error, Result};
use crate::runtime::{natives, EnvRef, Environment, Value};

/// Tree-walking evaluator for Hexa expressions
///
/// Dispatches on value shape: self-evaluating data is returned unchanged,
/// symbols are resolved through the environment chain, and lists are
/// interpreted as special forms (`fn`, `def`, `if`) or function application.
///
/// The evaluator keeps no state across calls beyond the environment chain;
/// each evaluation is a pure function of `(expr, env)` plus whatever side
/// effects natives perform.
pub struct Evaluator {
    /// Global scope, pre-populated with the native procedures
    global: EnvRef,
}

impl Evaluator {
    /// Creates an evaluator with a fresh global environment and the native
    /// procedures installed
    pub fn new() -> Self {
        let global = Environment::new();
        natives::install(&global);
        Evaluator { global }
    }

    /// Returns the global environment handle
    pub fn global_env(&self) -> &EnvRef {
        &self.global
    }

    /// Evaluates a sequence of top-level expressions, returning the last
    /// result (Nil for an empty program)
    ///
    /// Stops at the first error. A driver wanting best-effort execution
    /// calls [`eval`](Evaluator::eval) per expression instead.
    pub fn execute(&mut self, program: &[Value]) -> Result<Value> {
        let mut last = Value::Nil;
        for expr in program {
            last = self.eval(expr)?;
        }
        Ok(last)
    }

    /// Evaluates one expression in the global environment
    pub fn eval(&mut self, expr: &Value) -> Result<Value> {
        let env = Rc::clone(&self.global);
        self.eval_in(expr, &env)
    }

    /// Evaluates one expression in the given environment
    ///
    /// The expression is borrowed, never consumed: the caller stays
    /// responsible for it.
    pub fn eval_in(&self, expr: &Value, env: &EnvRef) -> Result<Value> {
        match expr {
            Value::Nil
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Closure { .. }
            | Value::Native { .. } => Ok(expr.clone()),

            Value::Symbol(name) => env.borrow().get(name),

            Value::List(items) => self.eval_list(items, env),
        }
    }

    fn eval_list(&self, items: &[Value], env: &EnvRef) -> Result<Value> {
        // An empty list evaluates to itself
        if items.is_empty() {
            return Ok(Value::List(Vec::new()));
        }

        if let Value::Symbol(head) = &items[0] {
            match head.as_str() {
                "fn" => return self.eval_fn(&items[1..], env),
                "def" => return self.eval_def(&items[1..], env),
                "if" => return self.eval_if(&items[1..], env),
                _ => {}
            }
        }

        self.eval_call(items, env)
    }

    /// `[fn [params...] body...]` builds a closure capturing `env`
    fn eval_fn(&self, args: &[Value], env: &EnvRef) -> Result<Value> {
        if args.len() < 2 {
            return Err(Error::ArityMismatch {
                expected: 2,
                got: args.len(),
            });
        }

        let param_list = match &args[0] {
            Value::List(params) => params,
            other => {
                return Err(Error::TypeError {
                    expected: "parameter list".to_string(),
                    got: other.type_name().to_string(),
                })
            }
        };

        let mut params = Vec::with_capacity(param_list.len());
        for param in param_list {
            match param {
                Value::Symbol(name) => params.push(name.clone()),
                other => {
                    return Err(Error::TypeError {
                        expected: "parameter name".to_string(),
                        got: other.type_name().to_string(),
                    })
                }
            }
        }

        Ok(Value::Closure {
            params,
            body: Rc::new(args[1..].to_vec()),
            env: Rc::clone(env),
        })
    }

    /// `[def name expr]` binds the evaluated expression in `env` and
    /// returns the value
    fn eval_def(&self, args: &[Value], env: &EnvRef) -> Result<Value> {
        if args.len() != 2 {
            return Err(Error::ArityMismatch {
                expected: 2,
                got: args.len(),
            });
        }

        let name = match &args[0] {
            Value::Symbol(name) => name,
            other => {
                return Err(Error::TypeError {
                    expected: "variable name".to_string(),
                    got: other.type_name().to_string(),
                })
            }
        };

        let value = self.eval_in(&args[1], env)?;
        env.borrow_mut().define(name.clone(), value.clone());
        Ok(value)
    }

    /// `[if cond then else]` evaluates exactly one branch
    fn eval_if(&self, args: &[Value], env: &EnvRef) -> Result<Value> {
        if args.len() != 3 {
            return Err(Error::ArityMismatch {
                expected: 3,
                got: args.len(),
            });
        }

        let condition = self.eval_in(&args[0], env)?;
        if condition.is_truthy() {
            self.eval_in(&args[1], env)
        } else {
            self.eval_in(&args[2], env)
        }
    }

    /// Function application: evaluate the head, then the arguments left to
    /// right, then invoke
    fn eval_call(&self, items: &[Value], env: &EnvRef) -> Result<Value> {
        let callee = self.eval_in(&items[0], env)?;

        let mut args = Vec::with_capacity(items.len() - 1);
        for arg_expr in &items[1..] {
            args.push(self.eval_in(arg_expr, env)?);
        }

        match callee {
            Value::Closure {
                params,
                body,
                env: captured,
            } => {
                if params.len() != args.len() {
                    return Err(Error::ArityMismatch {
                        expected: params.len(),
                        got: args.len(),
                    });
                }

                tracing::debug!(arity = params.len(), "applying closure");

                // Fresh frame enclosed by the definition-site environment,
                // not the caller's: lexical scoping
                let frame = Environment::with_enclosing(&captured);
                {
                    let mut frame = frame.borrow_mut();
                    for (param, arg) in params.into_iter().zip(args) {
                        frame.define(param, arg);
                    }
                }

                // Body expressions run in sequence; only the last result
                // survives the frame
                let mut result = Value::Nil;
                for expr in body.iter() {
                    result = self.eval_in(expr, &frame)?;
                }
                Ok(result)
            }

            Value::Native { func, name } => {
                tracing::debug!(name, argc = args.len(), "invoking native");
                func(&args)
            }

            other => Err(Error::NotCallable {
                type_name: other.type_name().to_string(),
            }),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn sym(s: &str) -> Value {
        Value::Symbol(s.to_string())
    }

    #[test]
    fn test_self_evaluating() {
        let mut evaluator = Evaluator::new();

        assert_eq!(evaluator.eval(&Value::Nil).unwrap(), Value::Nil);
        assert_eq!(evaluator.eval(&num(1.5)).unwrap(), num(1.5));
        assert_eq!(
            evaluator.eval(&Value::String("s".to_string())).unwrap(),
            Value::String("s".to_string())
        );
    }

    #[test]
    fn test_empty_list_evaluates_to_itself() {
        let mut evaluator = Evaluator::new();
        let result = evaluator.eval(&Value::List(Vec::new())).unwrap();

        assert_eq!(result, Value::List(Vec::new()));
    }

    #[test]
    fn test_symbol_resolution() {
        let mut evaluator = Evaluator::new();
        evaluator
            .global_env()
            .borrow_mut()
            .define("x".to_string(), num(10.0));

        assert_eq!(evaluator.eval(&sym("x")).unwrap(), num(10.0));
        assert_eq!(
            evaluator.eval(&sym("missing")),
            Err(Error::UndefinedVariable {
                name: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_def_binds_and_returns_value() {
        let mut evaluator = Evaluator::new();
        let expr = Value::List(vec![sym("def"), sym("x"), num(10.0)]);

        assert_eq!(evaluator.eval(&expr).unwrap(), num(10.0));
        assert_eq!(evaluator.eval(&sym("x")).unwrap(), num(10.0));
    }

    #[test]
    fn test_fn_builds_closure_retaining_env() {
        let mut evaluator = Evaluator::new();
        let before = Rc::strong_count(evaluator.global_env());

        let expr = Value::List(vec![
            sym("fn"),
            Value::List(vec![sym("a")]),
            sym("a"),
        ]);
        let closure = evaluator.eval(&expr).unwrap();

        assert_eq!(closure.arity(), Some(1));
        assert_eq!(
            Rc::strong_count(evaluator.global_env()),
            before + 1
        );

        drop(closure);
        assert_eq!(Rc::strong_count(evaluator.global_env()), before);
    }

    #[test]
    fn test_fn_rejects_bad_parameter_list() {
        let mut evaluator = Evaluator::new();

        let not_a_list = Value::List(vec![sym("fn"), num(1.0), sym("a")]);
        assert!(matches!(
            evaluator.eval(&not_a_list),
            Err(Error::TypeError { .. })
        ));

        let bad_param = Value::List(vec![
            sym("fn"),
            Value::List(vec![num(1.0)]),
            sym("a"),
        ]);
        assert!(matches!(
            evaluator.eval(&bad_param),
            Err(Error::TypeError { .. })
        ));

        let no_body = Value::List(vec![sym("fn"), Value::List(Vec::new())]);
        assert!(matches!(
            evaluator.eval(&no_body),
            Err(Error::ArityMismatch { .. })
        ));
    }

    #[test]
    fn test_call_frame_released_after_call() {
        let mut evaluator = Evaluator::new();

        // [[fn [a] a] 1] -- the frame exists only for the call
        let identity = Value::List(vec![
            sym("fn"),
            Value::List(vec![sym("a")]),
            sym("a"),
        ]);
        let call = Value::List(vec![identity, num(1.0)]);

        let before = Rc::strong_count(evaluator.global_env());
        assert_eq!(evaluator.eval(&call).unwrap(), num(1.0));
        // The anonymous closure and its frame are both gone
        assert_eq!(Rc::strong_count(evaluator.global_env()), before);
    }
}
