//! Backend selection from flags and environment.

use std::env;

use tracing::warn;

use crate::backend::DEFAULT_BACKEND;

/// Environment variable naming the backend when `--model` is not given.
pub const MODEL_ENV_VAR: &str = "GCAUTO_MODEL";

/// Pick the backend name: the flag wins, then `GCAUTO_MODEL`, then the default.
///
/// The name is not validated here; resolution happens in the backend factory
/// so an unknown name is always reported, never replaced.
pub fn resolve_backend_name(flag: Option<&str>) -> String {
    if let Some(name) = flag {
        return name.to_string();
    }

    match env::var(MODEL_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        Ok(_) => {
            warn!(
                "{} is set but empty, using default '{}'",
                MODEL_ENV_VAR, DEFAULT_BACKEND
            );
            DEFAULT_BACKEND.to_string()
        }
        Err(env::VarError::NotUnicode(_)) => {
            warn!(
                "{} is not valid unicode, using default '{}'",
                MODEL_ENV_VAR, DEFAULT_BACKEND
            );
            DEFAULT_BACKEND.to_string()
        }
        Err(env::VarError::NotPresent) => DEFAULT_BACKEND.to_string(),
    }
}
