//! Access-token handling for Vertex REST calls.

use fresco_error::{ConfigError, FrescoResult};
use std::env;

/// Read the Vertex access token from the `VERTEX_ACCESS_TOKEN` environment
/// variable.
///
/// Token acquisition and refresh (service accounts, workload identity) is
/// deployment plumbing outside this library; the runtime is expected to
/// keep the variable populated. A `.env` file is honored when present.
pub fn vertex_access_token() -> FrescoResult<String> {
    let _ = dotenvy::dotenv();
    env::var("VERTEX_ACCESS_TOKEN")
        .map_err(|_| ConfigError::new("VERTEX_ACCESS_TOKEN environment variable not set").into())
}
