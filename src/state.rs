//! Shared state tracking for the file reader and writer.
//!
//! Both machines walk the same section sequence: magic, header, optional
//! index, data. States named `Before*` are transient and only observable
//! mid-transition; seeing one at operation entry is a logic error.

use crate::error::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum State {
    Uninit,
    BeforeMagic,
    BeforeHeader,
    AfterHeader,
    BeforeIndex,
    AfterIndex,
    InData,
    Eof,
}

impl State {
    fn is_transient(self) -> bool {
        matches!(
            self,
            State::BeforeMagic | State::BeforeHeader | State::BeforeIndex
        )
    }
}

/// State plus a latched terminal error. Once an operation fails
/// non-recoverably, every later operation returns the same error again.
pub(crate) struct Stateful {
    state: State,
    err: Option<Error>,
}

impl Stateful {
    pub(crate) fn new() -> Stateful {
        Stateful {
            state: State::Uninit,
            err: None,
        }
    }

    pub(crate) fn state(&self) -> State {
        self.state
    }

    pub(crate) fn set(&mut self, state: State) {
        self.state = state;
    }

    /// Returns the latched error, if any, without consuming it.
    pub(crate) fn check_err(&self) -> Result<()> {
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Panics if the machine is resting in a transient state, which can
    /// only happen through a bug in this crate.
    pub(crate) fn sanity_check(&self) {
        if self.state.is_transient() {
            panic!("logic error: invalid state {:?}", self.state);
        }
    }

    /// Moves from `expected` to `to`, failing with a latched error or a
    /// state error when the machine is anywhere else.
    pub(crate) fn transition(
        &mut self,
        expected: State,
        to: State,
        what: &'static str,
    ) -> Result<()> {
        self.check_err()?;
        if self.state == expected {
            self.state = to;
            return Ok(());
        }
        self.sanity_check();
        Err(Error::State(what))
    }

    /// Latches `err` as the terminal error and returns it.
    pub(crate) fn fail(&mut self, err: Error) -> Error {
        debug_assert!(self.err.is_none(), "logic error: already in error state");
        self.err = Some(err.clone());
        err
    }

    /// Latches the closed error. Returns an error only when already
    /// closed.
    pub(crate) fn close(&mut self) -> Result<()> {
        if matches!(self.err, Some(Error::Closed)) {
            return Err(Error::Closed);
        }
        self.err = Some(Error::Closed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_happy_path() {
        let mut s = Stateful::new();
        assert!(s
            .transition(State::Uninit, State::BeforeMagic, "must call header()")
            .is_ok());
        assert_eq!(s.state(), State::BeforeMagic);
    }

    #[test]
    fn transition_from_wrong_state() {
        let mut s = Stateful::new();
        s.set(State::AfterHeader);
        let err = s
            .transition(State::Uninit, State::BeforeMagic, "header() already called")
            .unwrap_err();
        assert!(matches!(err, Error::State(_)));
        assert_eq!(s.state(), State::AfterHeader);
    }

    #[test]
    fn latched_error_is_returned_again() {
        let mut s = Stateful::new();
        let _ = s.fail(Error::Format("broken"));
        let err = s
            .transition(State::Uninit, State::BeforeMagic, "must call header()")
            .unwrap_err();
        assert!(matches!(err, Error::Format("broken")));
        assert!(s.check_err().is_err());
    }

    #[test]
    fn close_is_latched_and_idempotent_error() {
        let mut s = Stateful::new();
        assert!(s.close().is_ok());
        assert!(matches!(s.close(), Err(Error::Closed)));
        assert!(matches!(s.check_err(), Err(Error::Closed)));
    }
}
