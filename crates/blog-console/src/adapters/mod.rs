//! Terminal implementations of the presentation ports.

mod console_navigator;
mod terminal_ui;

pub use console_navigator::ConsoleNavigator;
pub use terminal_ui::{AutoConfirmUi, TerminalUi};
