use std::env;
use wealthwise_api::openapi::openapi_json;

/// Writes the OpenAPI document to the path given as the first argument
/// (default `openapi.json`).
fn main() -> anyhow::Result<()> {
    let path = env::args().nth(1).unwrap_or_else(|| "openapi.json".to_string());

    let json = openapi_json()?;
    std::fs::write(&path, json)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e))?;

    println!("OpenAPI document written to {}", path);
    Ok(())
}
