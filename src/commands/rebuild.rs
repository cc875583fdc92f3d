// `duemap rebuild`: rescan the workspace and rewrite the due map,
// regardless of cache state.

use crate::cache::DueCache;
use crate::config::Config;
use crate::error::Result;
use crate::gateway::TaskGateway;

pub async fn execute<G: TaskGateway + Sync>(gateway: &G, config: &Config) -> Result<()> {
    let mut cache = DueCache::new(&config.cache_file);
    let retained = cache.rebuild(gateway, &config.workspace_gid).await?;

    println!(
        "Cached {} due task(s) to {}",
        retained.len(),
        config.cache_file.display()
    );
    Ok(())
}
