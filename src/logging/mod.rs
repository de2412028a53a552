//! Logging infrastructure: console output on stderr plus a persistent log file.

mod subscriber;
mod utils;

pub use subscriber::init_subscriber;
