//! Command-line interface definition.
use clap::Parser;

use crate::request::DesiredState;

/// Enable or disable an Apache2 configuration fragment.
///
/// Runs `a2enconf` or `a2disconf` once and prints a JSON report on stdout.
#[derive(Parser, Debug)]
#[command(
    name = "apache2-config",
    version = option_env!("APACHE2_CONFIG_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
)]
pub struct Cli {
    /// Name of the configuration to enable/disable
    #[arg(short, long)]
    pub name: String,

    /// Desired state of the configuration
    #[arg(short, long, value_enum, default_value_t = DesiredState::Present)]
    pub state: DesiredState,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
