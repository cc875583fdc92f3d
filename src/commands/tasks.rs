// `duemap tasks <project>`: list every task in the named project.

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::{DueMapError, Result};
use crate::gateway::TaskGateway;

pub async fn execute<G: TaskGateway + Sync>(
    gateway: &G,
    config: &Config,
    project_name: &str,
) -> Result<()> {
    let projects = gateway.list_projects(&config.workspace_gid).await?;
    let project = projects
        .into_iter()
        .find(|project| project.name == project_name)
        .ok_or_else(|| DueMapError::UnknownProject(project_name.to_string()))?;

    let tasks = gateway.list_tasks(&project.gid).await?;
    if tasks.is_empty() {
        println!("{}", format!("No tasks in {}.", project.name).dimmed());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Task", "Name"]);
    for task in &tasks {
        table.add_row(vec![&task.gid, &task.name]);
    }

    println!("{table}");
    Ok(())
}
