// `duemap details <key>`: show the full record of the due task cached
// under a key.

use owo_colors::OwoColorize;

use crate::cache::DueCache;
use crate::config::Config;
use crate::error::{DueMapError, Result};
use crate::gateway::TaskGateway;

pub async fn execute<G: TaskGateway + Sync>(
    gateway: &G,
    config: &Config,
    key: &str,
) -> Result<()> {
    let mut cache = DueCache::new(&config.cache_file);
    cache.ensure_loaded(gateway, &config.workspace_gid).await?;

    let task_gid = cache
        .map()
        .get(key)
        .ok_or_else(|| DueMapError::UnknownKey(key.to_string()))?
        .to_string();

    let task = gateway.get_task(&task_gid).await?;

    println!("name:      {}", task.name);
    println!(
        "due:       {}",
        task.due_on
            .map(|date| date.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    if task.completed {
        println!("complete:  {}", "yes".green());
    } else {
        println!("complete:  {}", "no".red());
    }
    if let Some(notes) = task.notes.filter(|notes| !notes.is_empty()) {
        println!("notes:     {}", notes);
    }

    Ok(())
}
