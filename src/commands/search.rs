use anyhow::Result;

use crate::storage::store;

pub fn search_snippets(string: &str, filename: &str) -> Result<()> {
    let matches = store::search(string, filename)?;

    if matches.is_empty() {
        println!("No matching code snippets were found.");
        return Ok(());
    }

    for record in matches {
        println!("{}: {}", record.name, record.snippet);
    }

    Ok(())
}
