// `duemap invalidate`: delete the due map so the next run rebuilds it.
// The explicit replacement for manually deleting the cache file.

use std::path::Path;

use crate::cache::DueCache;
use crate::error::Result;

pub fn execute(cache_file: &Path) -> Result<()> {
    let existed = cache_file.exists();

    let mut cache = DueCache::new(cache_file);
    cache.purge()?;

    if existed {
        println!(
            "Removed {}; the next run will rebuild it from the workspace",
            cache_file.display()
        );
    } else {
        println!("No due map at {}", cache_file.display());
    }
    Ok(())
}
