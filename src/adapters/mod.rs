// Adapters layer: concrete implementations for external systems (http lookup source, page snapshot storage).

pub mod http;
pub mod snapshot;
