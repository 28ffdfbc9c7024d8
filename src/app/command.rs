use anyhow::Result;
use clap::App;
use clap::ArgMatches;

/// A subcommand of the app.
///
/// Commands describe their own CLI arguments with clap and execute themselves given the parsed arguments.
/// Each command must have a unique name.
pub trait Command<'a> {
    /// Returns the name of the command.
    fn name(&self) -> &str;

    /// Returns the clap subcommand describing the CLI arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command given its arguments.
    ///
    /// The app exits with a success status code iff `Ok(())` is returned.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
