use serde::{Deserialize, Serialize};

/// What an activated view asks the launcher to do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum Action {
    /// Leave the launcher for the given (possibly relative) URL.
    Navigate(String),
    /// Reload config and theme, then re-apply them to the scene.
    Reload,
}

impl Action {
    pub fn label(&self) -> &str {
        match self {
            Action::Navigate(_) => "Open Sample",
            Action::Reload => "Reload",
        }
    }

    pub fn target_url(&self) -> Option<&str> {
        match self {
            Action::Navigate(url) => Some(url),
            Action::Reload => None,
        }
    }
}
