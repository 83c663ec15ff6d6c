// ABOUTME: Themes command implementation.
// ABOUTME: Lists available themes and sets the active theme.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::theme;

/// List all available themes, marking the active one.
pub fn list_themes(config: &Config) {
    let current = &config.appearance.theme;

    println!("Available themes:");
    for name in theme::list_themes() {
        if name == *current {
            println!("  \u{25cf} {} (active)", name);
        } else {
            println!("    {}", name);
        }
    }
}

/// Set the active theme in config and save it.
pub fn set_theme(config: &mut Config, name: &str) -> Result<()> {
    let available = theme::list_themes();

    if !available.contains(&name) {
        bail!(
            "Unknown theme '{}'. Available themes:\n{}",
            name,
            available
                .iter()
                .map(|t| format!("  {}", t))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    config.appearance.theme = name.to_string();
    config.save()?;

    println!("Theme set to: {}", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_theme_validates_name() {
        let available = theme::list_themes();
        assert!(available.contains(&"default"));
        assert!(available.contains(&"midnight"));
        assert!(!available.contains(&"nonexistent"));
    }

    #[test]
    fn test_set_theme_rejects_unknown_without_touching_config() {
        let mut config = Config::default();
        assert!(set_theme(&mut config, "nonexistent").is_err());
        assert_eq!(config.appearance.theme, "default");
    }
}
