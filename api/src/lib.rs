// Module layout (Clean Architecture style)
// - bootstrap: configuration and wiring
// - infrastructure: SQLite repositories and crypto adapters
// - presentation: HTTP handlers and routing
// - application: ports, use cases and the error taxonomy
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
