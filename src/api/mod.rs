//! Local portal API.
//!
//! Exposes the clinic workflows to the browser as HTTP endpoints. Routes
//! are nested under `/api/`; the session lives in this process and every
//! data call goes through `ClinicApiClient`.
//!
//! The router is composable: `portal_router()` returns a `Router` that can
//! be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::portal_router;
pub use server::{start_portal_server, PortalServer, ServerError};
pub use types::ApiContext;
