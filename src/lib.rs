// Classic object-oriented design patterns, one console demo per pattern.
//
// Run individual demos with:
//   cargo run --bin flyweight
//   cargo run --bin iterator
//   cargo run --bin memento
//   cargo run --bin observer
//   cargo run --bin template_method

pub mod config;
pub mod console;
pub mod error;
pub mod flyweight;
pub mod iterator;
pub mod memento;
pub mod observer;
pub mod telemetry;
pub mod template_method;

pub use config::DemoConfig;
pub use console::Console;
pub use error::{PatternError, Result};
