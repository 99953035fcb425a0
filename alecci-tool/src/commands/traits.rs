//! Command traits shared by the alecci subcommands.

use crate::error::Result;

/// Standard command trait that all alecci commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Short description and help text for a command.
pub trait CommandDescription {
    /// A brief one-line description.
    fn description() -> &'static str;

    /// Multi-line help text explaining usage.
    fn help() -> &'static str;
}
