//! App core for the source viewer.
//!
//! Central struct wiring the settings engine and the tab registry, and
//! running the mandatory startup sequence.

use crate::managers::tab_registry::{TabRegistry, TabRegistryTrait, TabView};
use crate::services::address_resolver::AddressResolver;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
#[cfg(feature = "network")]
use crate::services::source_fetcher::HttpSourceFetcher;
use crate::services::source_fetcher::SourceFetcherTrait;

/// Central application struct holding the settings engine and the tab
/// registry.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub registry: TabRegistry,
}

impl App {
    /// Creates a new App over the given rendering collaborator and
    /// source fetcher.
    ///
    /// Opens the two mandatory startup tabs: one named tab plus the
    /// reserved trailing blank one. If attaching either fails, startup
    /// is aborted and the error propagates.
    pub fn new(
        view: Box<dyn TabView>,
        fetcher: Box<dyn SourceFetcherTrait>,
        settings_path: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let _ = settings_engine.load();
        Self::with_engine(settings_engine, view, fetcher)
    }

    /// Creates a new App backed by the blocking HTTP fetcher, configured
    /// from the network section of the loaded settings.
    #[cfg(feature = "network")]
    pub fn with_http_fetcher(
        view: Box<dyn TabView>,
        settings_path: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let _ = settings_engine.load();
        let fetcher = HttpSourceFetcher::from_settings(&settings_engine.get_settings().network)?;
        Self::with_engine(settings_engine, view, Box::new(fetcher))
    }

    fn with_engine(
        settings_engine: SettingsEngine,
        view: Box<dyn TabView>,
        fetcher: Box<dyn SourceFetcherTrait>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let settings = settings_engine.get_settings().clone();
        let resolver = AddressResolver::new(&settings.general.default_scheme);
        let mut registry =
            TabRegistry::new(view, resolver, fetcher, &settings.general.new_tab_title);

        registry
            .open_tab(&settings.general.new_tab_title, "")
            .map_err(|e| format!("Startup tab failed: {}", e))?;
        registry
            .open_tab("", "")
            .map_err(|e| format!("Startup tab failed: {}", e))?;

        Ok(Self {
            settings_engine,
            registry,
        })
    }
}
