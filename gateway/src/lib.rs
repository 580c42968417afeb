pub mod commands;
pub mod handlers;
pub mod server;
pub mod templates;

use colored::Colorize;

pub use commands::command_argument_builder;
pub use server::{AppState, CACHE_CONTROL, ServerError, router};
pub use templates::Templates;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn print_banner() {
    println!();
    println!("  {}", "~ urbit-gateway".bright_white().bold());
    println!(
        "  {}",
        format!("v{} · one page per Urbit ID", env!("CARGO_PKG_VERSION")).bright_black()
    );
    println!();
}
