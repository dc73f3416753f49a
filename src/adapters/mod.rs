// Adapters layer: concrete implementations for external systems (http, diagnostics).

pub mod diagnostics;
pub mod http;
