use crate::app_shell::{resolve_route_from_hash, to_route_hash, RouteKey, APP_ROUTES};
use crate::cli::{Cli, Commands, RouteCommands};
use crate::domain::models::RouteReport;
use crate::services::output::Output;

fn report(key: RouteKey) -> RouteReport {
    let route = key.route();
    RouteReport {
        key: key.to_string(),
        label: route.label.to_string(),
        hash: route.hash.to_string(),
    }
}

pub fn handle_route_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Route { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        RouteCommands::Resolve { fragment } => {
            let key = resolve_route_from_hash(fragment);
            tracing::debug!(fragment = %fragment, route = %key, "resolved");
            Output::new(cli.json).report(report(key), |r| r.key.clone())?;
        }
        RouteCommands::Hash { route } => {
            Output::new(cli.json).report(to_route_hash(*route), |h| h.clone())?;
        }
        RouteCommands::List => {
            let routes: Vec<RouteReport> = APP_ROUTES.iter().map(|r| report(r.key)).collect();
            Output::new(cli.json).rows(&routes, |r| {
                format!("{}\t{}\t{}", r.key, r.label, r.hash)
            })?;
        }
    }

    Ok(true)
}
