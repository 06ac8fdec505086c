pub mod accept;
pub mod pointer;

pub use accept::{wire_accept_button, AcceptWiring};
pub use pointer::{wire_evasive_handlers, EvasiveWiring};
