use crate::prelude::println;
use autofix_core::RewriteError;
use colored::Colorize;

/// Progress line on stdout.
pub fn info(message: impl AsRef<str>) {
    println!("{} {}", "[INFO]".green().bold(), message.as_ref());
}

/// Diagnostics go to stdout as well, next to the progress lines.
pub fn failure(err: &RewriteError) {
    println!("{} {}", "[ERROR]".red().bold(), err);
}

/// Dry-run output: the rewritten file, untouched.
pub fn rewritten(content: &str) {
    anstream::print!("{}", content);
}

/// Argument errors follow the same stdout contract as every other failure.
pub fn invalid_arguments(err: &clap::Error) {
    println!("{} {}", "[ERROR]".red().bold(), err.render());
}
