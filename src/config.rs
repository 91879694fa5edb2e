//! Service Configuration
//!
//! Runtime settings read once from the process environment at startup:
//!
//! - `PORT`: listen port, default `3001`.
//! - `DATA_DIR`: directory of the document collections; unset selects the
//!   seeded in-memory backend.
//! - `DELETE_POLICY`: `idempotent` (default) or `strict`.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::api::DeletePolicy;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds on.
    pub port: u16,
    /// Directory of the document collections; `None` selects the in-memory
    /// backend.
    pub data_dir: Option<PathBuf>,
    /// Answer for deletes aimed at absent records.
    pub delete_policy: DeletePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => bail!("invalid PORT value: {raw}"),
            },
            Err(_) => 3001,
        };

        let data_dir = std::env::var("DATA_DIR").ok().map(PathBuf::from);

        let delete_policy = match std::env::var("DELETE_POLICY") {
            Ok(raw) => match raw.as_str() {
                "idempotent" => DeletePolicy::Idempotent,
                "strict" => DeletePolicy::Strict,
                other => bail!("invalid DELETE_POLICY value: {other}"),
            },
            Err(_) => DeletePolicy::Idempotent,
        };

        Ok(Self {
            port,
            data_dir,
            delete_policy,
        })
    }
}
