use clap::Parser;
use conspectus_mobile::cli::Cli;
use conspectus_mobile::commands::{
    handle_env_commands, handle_route_commands, handle_verify_commands,
};
use conspectus_mobile::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    if handle_route_commands(&cli)? || handle_verify_commands(&cli)? {
        return Ok(());
    }
    handle_env_commands(&cli)?;
    Ok(())
}
