//! Input focus stack
//!
//! Every focus claimant registers a token once, then pushes it while it
//! owns exclusive device input. Only the holder of the top token may
//! interpret exclusive input for the tick; everyone else still runs
//! their non-input update paths.
//!
//! Pops must match the top of the stack exactly. A mismatched pop means
//! the focus invariant is already broken for every later tick, so it
//! fails fast instead of being papered over.

/// Opaque identifier for a focus claimant
///
/// Allocated once per claimant at construction time and reused across
/// activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusToken(u16);

/// Ordered stack of focus tokens; the top token receives exclusive input
#[derive(Debug, Default)]
pub struct FocusStack {
    stack: Vec<FocusToken>,
    names: Vec<&'static str>,
}

impl FocusStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a token. The name only feeds logging and panic messages.
    pub fn register(&mut self, name: &'static str) -> FocusToken {
        let token = FocusToken(self.names.len() as u16);
        self.names.push(name);
        token
    }

    pub fn name(&self, token: FocusToken) -> &'static str {
        self.names[token.0 as usize]
    }

    /// Make `token` the current receiver of exclusive input.
    ///
    /// Pushing a token that is already somewhere in the stack is legal
    /// only for the transient steal pattern (pushed and popped within
    /// the same frame); it is logged because an unbalanced duplicate is
    /// the first symptom of a broken frame.
    pub fn push(&mut self, token: FocusToken) {
        if self.stack.contains(&token) {
            log::warn!("focus push of {} while already in the stack", self.name(token));
        } else {
            log::trace!("focus push {}", self.name(token));
        }
        self.stack.push(token);
    }

    /// Restore the prior receiver. `token` must be the current top.
    pub fn pop(&mut self, token: FocusToken) {
        match self.stack.last() {
            Some(&top) if top == token => {
                self.stack.pop();
                log::trace!("focus pop {}", self.name(token));
            }
            Some(&top) => panic!(
                "focus pop out of order: {} is on top, tried to pop {}",
                self.name(top),
                self.name(token)
            ),
            None => panic!(
                "focus pop of {} on an empty stack",
                self.name(token)
            ),
        }
    }

    /// Current receiver of exclusive input, if any
    pub fn peek(&self) -> Option<FocusToken> {
        self.stack.last().copied()
    }

    pub fn is_top(&self, token: FocusToken) -> bool {
        self.peek() == Some(token)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
