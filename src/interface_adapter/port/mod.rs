pub mod terminal_port;

pub use terminal_port::TerminalPort;
