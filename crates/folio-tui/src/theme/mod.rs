// ABOUTME: Theme system with semantic color roles.
// ABOUTME: Built-in themes and lookup by name.

use ratatui::style::Color;

pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub user_message: Color,
    pub agent_message: Color,
    pub pending: Color,
}

pub static DEFAULT_THEME: Theme = Theme {
    name: "default",
    background: Color::Rgb(24, 24, 32),
    surface: Color::Rgb(34, 34, 46),
    text: Color::Rgb(228, 228, 238),
    text_muted: Color::Rgb(140, 140, 160),
    primary: Color::Rgb(225, 70, 80),
    accent: Color::Rgb(120, 140, 255),
    success: Color::Rgb(100, 220, 140),
    warning: Color::Rgb(255, 200, 100),
    error: Color::Rgb(255, 100, 120),
    user_message: Color::Rgb(110, 180, 255),
    agent_message: Color::Rgb(230, 150, 150),
    pending: Color::Rgb(255, 190, 120),
};

pub static LIGHT_THEME: Theme = Theme {
    name: "light",
    background: Color::Rgb(250, 250, 252),
    surface: Color::Rgb(255, 255, 255),
    text: Color::Rgb(30, 30, 40),
    text_muted: Color::Rgb(110, 110, 130),
    primary: Color::Rgb(200, 40, 55),
    accent: Color::Rgb(60, 90, 220),
    success: Color::Rgb(40, 160, 80),
    warning: Color::Rgb(200, 140, 20),
    error: Color::Rgb(200, 50, 70),
    user_message: Color::Rgb(40, 110, 200),
    agent_message: Color::Rgb(170, 60, 70),
    pending: Color::Rgb(190, 130, 40),
};

pub static MIDNIGHT_THEME: Theme = Theme {
    name: "midnight",
    background: Color::Rgb(10, 13, 26),
    surface: Color::Rgb(18, 22, 42),
    text: Color::Rgb(200, 210, 235),
    text_muted: Color::Rgb(100, 115, 150),
    primary: Color::Rgb(240, 90, 100),
    accent: Color::Rgb(90, 150, 245),
    success: Color::Rgb(80, 200, 160),
    warning: Color::Rgb(240, 180, 100),
    error: Color::Rgb(240, 90, 110),
    user_message: Color::Rgb(90, 160, 240),
    agent_message: Color::Rgb(240, 140, 150),
    pending: Color::Rgb(240, 190, 110),
};

pub static PAPER_THEME: Theme = Theme {
    name: "paper",
    background: Color::Rgb(246, 241, 230),
    surface: Color::Rgb(252, 248, 240),
    text: Color::Rgb(50, 44, 38),
    text_muted: Color::Rgb(130, 120, 105),
    primary: Color::Rgb(175, 55, 55),
    accent: Color::Rgb(90, 110, 170),
    success: Color::Rgb(70, 140, 80),
    warning: Color::Rgb(180, 130, 40),
    error: Color::Rgb(180, 60, 60),
    user_message: Color::Rgb(70, 100, 170),
    agent_message: Color::Rgb(150, 70, 70),
    pending: Color::Rgb(170, 120, 50),
};

/// Every built-in theme; lookup and listing both derive from this table.
static THEMES: [&Theme; 4] = [&DEFAULT_THEME, &LIGHT_THEME, &MIDNIGHT_THEME, &PAPER_THEME];

pub fn get_theme(name: &str) -> &'static Theme {
    THEMES
        .iter()
        .find(|t| t.name == name)
        .copied()
        .unwrap_or(&DEFAULT_THEME)
}

pub fn list_themes() -> Vec<&'static str> {
    THEMES.iter().map(|t| t.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    /// Helper to serialize a Theme to a stable text format for snapshots.
    fn theme_to_snapshot(theme: &Theme) -> String {
        let color_to_str = |c: Color| -> String {
            match c {
                Color::Rgb(r, g, b) => format!("rgb({}, {}, {})", r, g, b),
                other => format!("{:?}", other),
            }
        };

        format!(
            r#"Theme: {}
  background: {}
  surface: {}
  text: {}
  text_muted: {}
  primary: {}
  accent: {}
  success: {}
  warning: {}
  error: {}
  user_message: {}
  agent_message: {}
  pending: {}"#,
            theme.name,
            color_to_str(theme.background),
            color_to_str(theme.surface),
            color_to_str(theme.text),
            color_to_str(theme.text_muted),
            color_to_str(theme.primary),
            color_to_str(theme.accent),
            color_to_str(theme.success),
            color_to_str(theme.warning),
            color_to_str(theme.error),
            color_to_str(theme.user_message),
            color_to_str(theme.agent_message),
            color_to_str(theme.pending),
        )
    }

    #[test]
    fn test_default_theme_snapshot() {
        assert_snapshot!(theme_to_snapshot(&DEFAULT_THEME));
    }

    #[test]
    fn test_theme_list_snapshot() {
        let themes = list_themes();
        assert_snapshot!(themes.join("\n"));
    }

    #[test]
    fn test_get_theme_returns_correct_theme() {
        assert_eq!(get_theme("default").name, "default");
        assert_eq!(get_theme("light").name, "light");
        assert_eq!(get_theme("midnight").name, "midnight");
        assert_eq!(get_theme("paper").name, "paper");
    }

    #[test]
    fn test_get_theme_unknown_returns_default() {
        assert_eq!(get_theme("unknown").name, "default");
    }

    #[test]
    fn test_list_themes_returns_all_themes() {
        let themes = list_themes();
        assert_eq!(themes.len(), 4);
        for name in themes {
            assert_eq!(get_theme(name).name, name);
        }
    }

    #[test]
    fn test_light_theme_has_light_background() {
        if let Color::Rgb(r, g, b) = get_theme("light").background {
            assert!(r > 200 && g > 200 && b > 200);
        } else {
            panic!("Expected RGB color");
        }
    }
}
