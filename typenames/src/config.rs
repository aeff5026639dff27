//! TOML configuration of the default tensor type.

use crate::declared::TypeSource;
use crate::error::{Error, Result};
use crate::registry::TypeNameRegistry;
use crate::types::ScalarType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Example:
///
/// ```toml
/// default_tensor_type = "torch.cuda.FloatTensor"
/// default_dtype = "Double"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TypeConfig {
    pub default_tensor_type: Option<String>,
    pub default_dtype: Option<ScalarType>,
}

impl FromStr for TypeConfig {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl TypeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading type configuration from {:?}", path);
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {:?}: {}", path, e)))?;
        raw.parse()
    }

    /// Sets the registry's defaults, tensor type first and then dtype.
    pub fn apply<S: TypeSource>(&self, registry: &TypeNameRegistry<S>) -> Result<()> {
        if let Some(name) = &self.default_tensor_type {
            registry.set_default_tensor_type_from_str(name)?;
        }
        if let Some(dtype) = self.default_dtype {
            registry.defaults().set_scalar_type(dtype)?;
        }
        Ok(())
    }
}
