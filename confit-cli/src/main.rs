mod cli;
mod logging;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    logging::init_tracing(command_line_interface.verbosity());
    command_line_interface.run()
}
