use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Process-wide presentation mode. Every themed component reads this each
/// frame; only the user's toggle action may change it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// On-disk settings document. One durable slot; absent or unreadable files
/// fall back to the compiled-in default.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
struct Settings {
    theme: Theme,
}

/// Owns the active theme and its durable slot. Loads once at startup and
/// writes back on every toggle.
pub struct ThemeStore {
    path: PathBuf,
    theme: Theme,
}

impl ThemeStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let theme = Self::load(&path).unwrap_or_default();
        Self { path, theme }
    }

    fn load(path: &Path) -> Option<Theme> {
        let raw = fs::read_to_string(path).ok()?;
        let settings: Settings = serde_json::from_str(&raw).ok()?;
        Some(settings.theme)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist immediately. A failed write keeps the new
    /// in-memory value; the theme is decoration, not data worth crashing for.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        match self.persist() {
            Ok(()) => {}
            Err(e) => eprintln!("[ORBIT] Failed to save settings: {e}"),
        }
        self.theme
    }

    fn persist(&self) -> io::Result<()> {
        let settings = Settings { theme: self.theme };
        let json = serde_json::to_string_pretty(&settings)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        fs::write(&self.path, json)
    }
}
