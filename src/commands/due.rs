// `duemap due`: list the cached due-task keys in file order.

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use owo_colors::OwoColorize;

use crate::cache::DueCache;
use crate::config::Config;
use crate::error::Result;
use crate::gateway::TaskGateway;

pub async fn execute<G: TaskGateway + Sync>(gateway: &G, config: &Config) -> Result<()> {
    let mut cache = DueCache::new(&config.cache_file);
    cache.ensure_loaded(gateway, &config.workspace_gid).await?;

    if cache.map().is_empty() {
        println!("{}", "No outstanding due tasks.".dimmed());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Key", "Task"]);
    for (key, task_gid) in cache.map().iter() {
        table.add_row(vec![key, task_gid]);
    }

    println!("{table}");
    Ok(())
}
