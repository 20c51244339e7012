use std::collections::{HashMap, HashSet};

use crate::interpreter::value::core::Value;

/// The variable environment: a stack of local frames plus one persistent
/// global frame.
///
/// Frames are pushed on entering a block, a loop header, or a function call,
/// and popped on leaving it; they are never retained past their lexical
/// extent. The global frame lives for the whole run and holds the names
/// introduced by top-level `global` declarations.
///
/// Scoping is lexical, not dynamic: a function call marks the first frame it
/// pushes as the *call floor*, and neither reads nor writes ever cross below
/// it into the caller's locals.
#[derive(Debug, Default)]
pub struct Scope {
    globals:     HashMap<String, Value>,
    frames:      Vec<HashMap<String, Value>>,
    call_floor:  usize,
    call_params: HashSet<String>,
}

/// The caller's scope state saved by [`Scope::enter_call`] and restored by
/// [`Scope::leave_call`].
#[derive(Debug)]
pub struct CallSnapshot {
    floor:  usize,
    params: HashSet<String>,
}

impl Scope {
    /// Creates an empty scope with no frames and no globals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a global variable, initialized to `none`.
    ///
    /// The parser rejects duplicate declarations, so redeclaring here simply
    /// resets the value.
    pub fn declare_global(&mut self, name: &str) {
        self.globals.insert(name.to_string(), Value::None);
    }

    /// Pushes a fresh local frame.
    pub fn push_frame(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Pops the innermost local frame.
    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Looks up a variable.
    ///
    /// Searches the current call's frames innermost to outermost, then the
    /// global frame. Frames below the call floor belong to callers and are
    /// invisible.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{evaluator::scope::Scope, value::core::Value};
    ///
    /// let mut scope = Scope::new();
    /// scope.push_frame();
    /// scope.define_local("x", Value::Number(1.0));
    ///
    /// assert!(scope.lookup("x").is_some());
    /// assert!(scope.lookup("y").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        for frame in self.frames[self.call_floor..].iter().rev() {
            if let Some(value) = frame.get(name) {
                return Some(value);
            }
        }
        self.globals.get(name)
    }

    /// Binds a name directly in the innermost frame.
    ///
    /// Used for function parameters and loop variables, which always get a
    /// fresh binding in their own frame regardless of what outer frames or
    /// the globals contain.
    pub fn define_local(&mut self, name: &str, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), value);
        } else {
            self.globals.insert(name.to_string(), value);
        }
    }

    /// Writes a variable according to the language's assignment rule.
    ///
    /// In order:
    /// 1. If the name exists in any frame of the current call, innermost
    ///    first, it is updated there.
    /// 2. Otherwise, if the name is not one of the current call's parameters
    ///    and exists among the globals, the global is updated.
    /// 3. Otherwise a new binding is created in the innermost frame.
    ///
    /// Step 2's parameter exception is what makes a parameter shadow a
    /// same-named global for writes as well as reads: assigning through the
    /// parameter name inside the call never touches the global.
    pub fn set(&mut self, name: &str, value: Value) {
        for frame in self.frames[self.call_floor..].iter_mut().rev() {
            if let Some(slot) = frame.get_mut(name) {
                *slot = value;
                return;
            }
        }

        if !self.call_params.contains(name)
           && let Some(slot) = self.globals.get_mut(name)
        {
            *slot = value;
            return;
        }

        self.define_local(name, value);
    }

    /// Enters a function call.
    ///
    /// Pushes the call's parameter frame, raises the call floor so the
    /// caller's locals become invisible, and records the parameter names for
    /// the write rule. Returns the caller's state for [`Scope::leave_call`].
    pub fn enter_call(&mut self, params: HashSet<String>) -> CallSnapshot {
        let snapshot = CallSnapshot { floor:  self.call_floor,
                                      params: std::mem::replace(&mut self.call_params, params), };
        self.call_floor = self.frames.len();
        self.push_frame();
        snapshot
    }

    /// Leaves a function call, dropping every frame the call created and
    /// restoring the caller's call floor and parameter set.
    pub fn leave_call(&mut self, snapshot: CallSnapshot) {
        self.frames.truncate(self.call_floor);
        self.call_floor = snapshot.floor;
        self.call_params = snapshot.params;
    }
}
