//! Minimal generic finite-state-machine engine
//!
//! A [`Machine`] holds exactly one current state value and a typed data
//! store. `process` copies the state out and delegates to its handler, which
//! may mutate the machine's data, replace its state, or both. Transitions are
//! explicit replacement: there is no state stack and no history.
//!
//! Two machine instances cooperate during lexing: the lexer machine and a
//! parser-side peer whose data store receives finished tokens. The engine
//! itself knows nothing about either; state enums implement [`State`] for
//! the machine type they drive.
//!
//! Processing is synchronous and non-reentrant: one input per `process`
//! call, all work completing before the call returns. A handler that fails
//! leaves the machine in an indeterminate state; callers must reset before
//! driving it again.

/// Handler capability for a machine's state values.
///
/// Implemented on `Copy` state enums so `process` can copy the current state
/// out of the machine and hand the handler mutable access to the whole
/// machine, including `set_state`.
pub trait State<M>: Copy {
    /// Per-step input fed by the driver
    type Input<'a>;
    /// Error produced by a failed step
    type Error;

    /// Process one input against this state
    fn on_input(self, input: Self::Input<'_>, machine: &mut M) -> Result<(), Self::Error>;
}

/// A finite-state machine: one current state plus a typed data store.
#[derive(Debug, Clone, Default)]
pub struct Machine<S, D> {
    state: S,
    data: D,
}

impl<S, D> Machine<S, D> {
    /// Create a machine in the given state with the given data store
    pub fn new(state: S, data: D) -> Self {
        Self { state, data }
    }

    /// Read the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Replace the current state. Any state value is legal; reachability is
    /// not validated.
    pub fn set_state(&mut self, state: S) {
        self.state = state;
    }

    /// Read the data store
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Mutable access to the data store
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Update-or-replace: the closure sees the current data and its result
    /// is returned to the caller
    pub fn update<R>(&mut self, f: impl FnOnce(&mut D) -> R) -> R {
        f(&mut self.data)
    }

    /// Replace the data store wholesale, returning the old value
    pub fn replace_data(&mut self, data: D) -> D {
        std::mem::replace(&mut self.data, data)
    }
}

impl<S, D> Machine<S, D>
where
    S: State<Self>,
{
    /// Delegate one input to the current state's handler
    pub fn process<'a>(&mut self, input: <S as State<Self>>::Input<'a>) -> Result<(), S::Error> {
        let state = self.state;
        state.on_input(input, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    enum GateState {
        #[default]
        Open,
        Closed,
    }

    #[derive(Debug, Default)]
    struct GateData {
        passed: usize,
        rejected: usize,
    }

    impl State<Machine<GateState, GateData>> for GateState {
        type Input<'a> = char;
        type Error = String;

        fn on_input(
            self,
            input: char,
            machine: &mut Machine<GateState, GateData>,
        ) -> Result<(), String> {
            match self {
                GateState::Open => {
                    if input == 'x' {
                        machine.set_state(GateState::Closed);
                    } else {
                        machine.update(|data| data.passed += 1);
                    }
                    Ok(())
                }
                GateState::Closed => {
                    machine.data_mut().rejected += 1;
                    Err(format!("gate closed, rejected '{}'", input))
                }
            }
        }
    }

    #[test]
    fn test_process_delegates_to_current_state() {
        let mut machine = Machine::new(GateState::Open, GateData::default());
        machine.process('a').unwrap();
        machine.process('b').unwrap();
        assert_eq!(machine.data().passed, 2);
        assert_eq!(*machine.state(), GateState::Open);
    }

    #[test]
    fn test_handler_transitions_take_effect_for_next_input() {
        let mut machine = Machine::new(GateState::Open, GateData::default());
        machine.process('x').unwrap();
        assert_eq!(*machine.state(), GateState::Closed);

        let err = machine.process('a').unwrap_err();
        assert!(err.contains("gate closed"));
        assert_eq!(machine.data().rejected, 1);
    }

    #[test]
    fn test_external_state_replacement() {
        let mut machine = Machine::new(GateState::Closed, GateData::default());
        assert!(machine.process('a').is_err());

        machine.set_state(GateState::Open);
        machine.process('a').unwrap();
        assert_eq!(machine.data().passed, 1);
    }

    #[test]
    fn test_update_returns_closure_result() {
        let mut machine = Machine::new(GateState::Open, GateData::default());
        let before = machine.update(|data| {
            let old = data.passed;
            data.passed = 10;
            old
        });
        assert_eq!(before, 0);
        assert_eq!(machine.data().passed, 10);
    }
}
