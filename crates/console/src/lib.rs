//! Terminal front end for Reversi.
//!
//! Menus to pick a game mode and AI settings, a text renderer, an
//! interactive player reading coordinates from the keyboard and a spinner
//! shown while the search runs.

pub mod error;
pub mod human;
pub mod menu;
pub mod render;
pub mod session;
pub mod spinner;

pub use error::ConsoleError;
pub use human::InteractivePlayer;
pub use menu::{GameMode, Menu, Seat};
pub use render::Renderer;
pub use session::Session;
pub use spinner::Spinner;
