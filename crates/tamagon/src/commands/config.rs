use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
        ConfigCommands::Path => {
            println!("{}", Config::path()?.display());
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = if path.exists() {
        Config::load_from(&path)?
    } else {
        println!("{}", "No config file yet; showing defaults.".dimmed());
        Config::default()
    };

    let slide = config
        .start_slide()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "1".to_string());
    let autoplay = config
        .autoplay_ms()
        .map(|ms| format!("{ms} ms"))
        .unwrap_or_else(|| "off".to_string());
    let effects = config.effects();

    println!("{}", "defaults".bold());
    println!("  start_slide   {slide}");
    println!("  windowed      {}", config.windowed());
    println!("  autoplay_ms   {autoplay}");
    println!("{}", "effects".bold());
    println!("  particles     {}", on_off(effects.particles));
    println!("  cursor_trail  {}", on_off(effects.cursor_trail));
    println!("  parallax      {}", on_off(effects.parallax));
    println!("  tilt          {}", on_off(effects.tilt));
    println!();
    println!("{} {}", "File:".dimmed(), path.display());
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let path = Config::path()?;
    set_in(&path, key, value)?;
    println!("{} {key} = {value}", "Saved".green());
    println!("{} {}", "File:".dimmed(), path.display());
    Ok(())
}

/// Update one key in the file at `path`. A file that fails to load is left
/// untouched.
fn set_in(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_from_or_default(path)?;
    config.set(key, value)?;
    config.save_to(path)
}

fn on_off(enabled: bool) -> colored::ColoredString {
    if enabled {
        "on".green()
    } else {
        "off".yellow()
    }
}
