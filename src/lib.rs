//! A card that animates through a palette, one transition per tap.
//!
//! The [animation] module holds the transition state machine, [render] turns its frames into
//! terminal cells and [terminal] wires both to the user's terminal.

pub mod animation;
pub mod config;
pub mod render;
pub mod terminal;

pub use animation::CardAnimation;
pub use config::Config;
