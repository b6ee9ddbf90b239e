use dioxus::document::eval;
use dioxus::prelude::*;

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The stored choice when it is a known theme, else the system preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(Self::parse) {
            Some(theme) => theme,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState(Signal<Theme>);

impl ThemeState {
    pub fn get(&self) -> Theme {
        (self.0)()
    }

    pub fn toggle(&mut self) {
        let next = self.get().toggled();
        self.0.set(next);
        apply(next, true);
    }
}

/// Sync the `dark` class on `<html>`, optionally saving the choice.
fn apply(theme: Theme, persist: bool) {
    let mut js = format!(
        r#"document.documentElement.classList.toggle("dark", {});"#,
        theme == Theme::Dark
    );
    if persist {
        js.push_str(&format!(
            r#"localStorage.setItem("{STORAGE_KEY}", "{}");"#,
            theme.as_str()
        ));
    }
    eval(&js);
}

/// Provide the theme context.
///
/// Starts light, then switches to the stored choice or, failing that, the
/// system preference once the page is running in a browser.
pub fn use_theme_provider() -> ThemeState {
    let mut theme = use_signal(Theme::default);

    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"return [
                    localStorage.getItem("{STORAGE_KEY}"),
                    window.matchMedia("(prefers-color-scheme: dark)").matches,
                ];"#
            );
            let initial = match eval(&js).join::<(Option<String>, bool)>().await {
                Ok((stored, prefers_dark)) => Theme::resolve(stored.as_deref(), prefers_dark),
                Err(error) => {
                    tracing::debug!(?error, "could not read stored theme");
                    Theme::default()
                }
            };

            theme.set(initial);
            apply(initial, false);
        });
    });

    use_context_provider(|| ThemeState(theme))
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn stored_choice_wins_over_system_preference() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn unknown_or_missing_choice_follows_system_preference() {
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
        assert_eq!(Theme::resolve(Some("sepia"), false), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn toggling_flips_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
