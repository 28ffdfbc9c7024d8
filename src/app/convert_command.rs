use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "convert";

pub(crate) struct ConvertCommand;

impl ConvertCommand {
    pub(crate) fn new() -> Self {
        ConvertCommand
    }
}

impl<'a> Command<'a> for ConvertCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Converts solver and grounder outputs into graph, timing and solution JSON files")
            .setting(AppSettings::DisableVersion)
            .args(&common::input_args())
            .args(&common::output_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let options = common::conversion_options(arg_matches)?;
        let outputs = common::output_paths(arg_matches);
        let conversion = common::create_converter(options).convert_and_write(&outputs)?;
        common::log_conversion(&conversion);
        info!("conversion succeeded");
        Ok(())
    }
}
