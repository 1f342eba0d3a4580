use crate::cli::{Cli, Commands, EnvCommands};
use crate::config::{check_env_example, load_runtime_env, read_env_file, EnvFileError, ProcessEnv};
use crate::domain::models::EnvExampleReport;
use crate::services::output::Output;

pub fn handle_env_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Env { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        EnvCommands::Check { env_file } => {
            let env = match env_file {
                Some(path) => load_runtime_env(&read_env_file(path)?)?,
                None => load_runtime_env(&ProcessEnv)?,
            };
            Output::new(cli.json).report(env, |e| {
                format!(
                    "runtime env valid (base path: {}, public url: {})",
                    e.deploy_base_path.as_deref().unwrap_or("unset"),
                    e.deploy_public_url.as_deref().unwrap_or("unset")
                )
            })?;
        }
        EnvCommands::Example { file } => {
            if !file.exists() {
                return Err(EnvFileError::Missing(file.clone()).into());
            }
            let content = std::fs::read_to_string(file)?;
            let keys = check_env_example(&content)?;
            let report = EnvExampleReport {
                file: file.display().to_string(),
                keys: keys.into_iter().collect(),
            };
            Output::new(cli.json).report(report, |r| {
                format!("{} documents {} runtime keys", r.file, r.keys.len())
            })?;
        }
    }

    Ok(true)
}
