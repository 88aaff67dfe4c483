use anyhow::Result;

use crate::storage::store;

pub fn get_snippet(name: &str, filename: &str) -> Result<()> {
    // Absence is a normal outcome, distinct from an unreadable file; only
    // the latter propagates as a failure.
    match store::get(name, filename)? {
        Some(record) => println!("Retrieved '{}' as '{}'", record.snippet, record.name),
        None => println!("Code snippet does not exist."),
    }

    Ok(())
}
