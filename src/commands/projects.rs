// `duemap projects`: list the workspace's projects.

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;
use crate::gateway::TaskGateway;

pub async fn execute<G: TaskGateway + Sync>(gateway: &G, config: &Config) -> Result<()> {
    let projects = gateway.list_projects(&config.workspace_gid).await?;
    if projects.is_empty() {
        println!("{}", "No projects in the workspace.".dimmed());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Project", "Name"]);
    for project in &projects {
        table.add_row(vec![&project.gid, &project.name]);
    }

    println!("{table}");
    Ok(())
}
