use anyhow::Result;

use crate::storage::store;

pub fn put_snippet(name: &str, snippet: &str, filename: &str) -> Result<()> {
    let stored = store::put(name, snippet, filename)?;

    println!("Stored '{}' as '{}'", stored.snippet, stored.name);
    Ok(())
}
