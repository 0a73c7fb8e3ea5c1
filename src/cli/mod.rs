pub mod console;
pub mod display;
pub mod interface;
pub mod menu;

pub use console::Console;
pub use interface::Cli;
pub use menu::MenuChoice;
