use anyhow::{Context, Result};
use std::process::Command;

/// Příkaz, kterým daný OS otevře URL v defaultním prohlížeči
fn browser_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        ("cmd", vec!["/C".to_string(), "start".to_string(), url.to_string()])
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Otevře konzoli v prohlížeči
pub fn open_browser(url: &str) -> Result<()> {
    let (program, args) = browser_command(url);

    Command::new(program)
        .args(&args)
        .spawn()
        .with_context(|| format!("Failed to run {}", program))?;

    tracing::info!("Opened browser: {}", url);
    Ok(())
}
