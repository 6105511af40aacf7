// Source viewer services.
// Services provide the stateless collaborators: address resolution, source fetching, settings.

pub mod address_resolver;
pub mod settings_engine;
pub mod source_fetcher;
