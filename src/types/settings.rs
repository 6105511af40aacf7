use serde::{Deserialize, Serialize};

/// Top-level viewer settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewerSettings {
    pub general: GeneralSettings,
    pub network: NetworkSettings,
}

/// General viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// Title given to a freshly promoted tab.
    pub new_tab_title: String,
    /// Scheme prepended when a bare address fails to parse verbatim.
    pub default_scheme: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            new_tab_title: "New Tab".to_string(),
            default_scheme: "http".to_string(),
        }
    }
}

/// Network settings for source fetching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkSettings {
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("srcviewer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
