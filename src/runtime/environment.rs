use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Shared, reference-counted handle to an environment
///
/// Closures capture the environment active at their definition site, so an
/// environment may outlive the call frame that created it. `Rc` clone/drop
/// perform the retain/release; `RefCell` provides interior mutability for
/// the single-threaded evaluator.
///
/// Reference counting does not reclaim cycles: a closure bound into a scope
/// that it (transitively) captures keeps both alive. Every recursive `def`
/// forms such a cycle. Accepted limitation.
pub type EnvRef = Rc<RefCell<Environment>>;

/// Name-to-value mapping with a parent link for lexical scoping
#[derive(Debug, Default)]
pub struct Environment {
    /// Variables bound in this scope
    entries: HashMap<String, Value>,
    /// Parent scope, searched when a name is not bound here
    enclosing: Option<EnvRef>,
}

impl Environment {
    /// Creates an empty environment with no parent (the global scope)
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// Creates an empty environment enclosed by `parent`
    ///
    /// Used once per function call, with the closure's captured environment
    /// as the parent.
    pub fn with_enclosing(parent: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Environment {
            entries: HashMap::new(),
            enclosing: Some(Rc::clone(parent)),
        }))
    }

    /// Binds `name` in this scope only, shadowing any outer binding
    ///
    /// An existing binding at the same name in this scope is replaced.
    pub fn define(&mut self, name: String, value: Value) {
        self.entries.insert(name, value);
    }

    /// Looks `name` up through the scope chain and returns a copy
    ///
    /// The copy means the caller's value stays valid however the chain is
    /// mutated afterwards, at the cost of duplicating on every lookup.
    pub fn get(&self, name: &str) -> Result<Value> {
        if let Some(value) = self.entries.get(name) {
            return Ok(value.clone());
        }

        match &self.enclosing {
            Some(parent) => parent.borrow().get(name),
            None => Err(Error::UndefinedVariable {
                name: name.to_string(),
            }),
        }
    }

    /// Overwrites the innermost existing binding of `name` anywhere in the
    /// chain
    ///
    /// Unlike [`define`](Environment::define) this mutates outer scopes, and
    /// it never creates a binding: assignment to an unbound name fails with
    /// `UndefinedVariable`.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<()> {
        if let Some(slot) = self.entries.get_mut(name) {
            *slot = value;
            return Ok(());
        }

        match &self.enclosing {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(Error::UndefinedVariable {
                name: name.to_string(),
            }),
        }
    }

    /// Checks whether `name` is bound anywhere in the chain
    pub fn exists(&self, name: &str) -> bool {
        if self.entries.contains_key(name) {
            return true;
        }
        match &self.enclosing {
            Some(parent) => parent.borrow().exists(name),
            None => false,
        }
    }
}
