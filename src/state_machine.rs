//! Chat session state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{AnswerSource, Message, Mode, Pending, Sender, SessionContext, SessionState};
pub use transition::{transition, TransitionError, TransitionResult};
