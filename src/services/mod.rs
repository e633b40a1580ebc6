pub mod artifact;
pub mod formatter;
pub mod grouper;
pub mod identity;
pub mod normalizer;
pub mod notifier;
pub mod pipeline;
pub mod providers;
pub mod transport;

pub use normalizer::ServiceNormalizer;
pub use notifier::{DiscordNotifier, NotifyOutcome};
pub use pipeline::{Pipeline, RunReport};
pub use providers::{CatalogProvider, FetchParams, JustWatchProvider};
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
