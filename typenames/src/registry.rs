//! Reverse lookup from canonical type names to type descriptors.

use crate::declared::{DeclaredTypes, TypeSource};
use crate::defaults::TypeDefaults;
use crate::error::{Error, Result};
use crate::textual::{type_to_string, DEFAULT_TYPE_NAME};
use crate::types::{BackendFamily, TensorOptions, TypeDescriptor};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

type NameTable = HashMap<String, TypeDescriptor>;

lazy_static! {
    static ref REGISTRY: TypeNameRegistry =
        TypeNameRegistry::new(DeclaredTypes, TypeDefaults::global());
}

/// Parses canonical type names into descriptors.
///
/// Each backend family gets its own table, built from the [`TypeSource`] the
/// first time a name of that family is parsed and never rebuilt afterwards.
/// Concurrent first lookups block until the single build completes.
pub struct TypeNameRegistry<S = DeclaredTypes> {
    source: S,
    defaults: Arc<TypeDefaults>,
    cpu_table: OnceLock<NameTable>,
    cuda_table: OnceLock<NameTable>,
}

impl<S: TypeSource> TypeNameRegistry<S> {
    pub fn new(source: S, defaults: Arc<TypeDefaults>) -> Self {
        TypeNameRegistry {
            source,
            defaults,
            cpu_table: OnceLock::new(),
            cuda_table: OnceLock::new(),
        }
    }

    pub fn defaults(&self) -> &TypeDefaults {
        &self.defaults
    }

    fn table(&self, family: BackendFamily) -> &NameTable {
        let cell = match family {
            BackendFamily::Cpu => &self.cpu_table,
            BackendFamily::Cuda => &self.cuda_table,
        };
        cell.get_or_init(|| self.build_table(family))
    }

    fn build_table(&self, family: BackendFamily) -> NameTable {
        let table: NameTable = self
            .source
            .types_for(family)
            .into_iter()
            .map(|desc| (type_to_string(&desc), desc))
            .collect();
        tracing::debug!("Built {} type name table; entries:{}", family, table.len());
        table
    }

    pub fn parse(&self, name: &str) -> Result<TypeDescriptor> {
        if name == DEFAULT_TYPE_NAME {
            return Ok(self.defaults.get());
        }
        self.table(BackendFamily::of_name(name))
            .get(name)
            .copied()
            .ok_or_else(|| Error::InvalidArgument(format!("invalid type: '{}'", name)))
    }

    pub fn options_from_string(&self, name: &str) -> Result<TensorOptions> {
        self.parse(name).map(TensorOptions::from)
    }

    /// Makes the type called `name` the default tensor type.
    pub fn set_default_tensor_type_from_str(&self, name: &str) -> Result<()> {
        let desc = self.parse(name)?;
        self.defaults.set(desc)
    }
}

/// The process-wide registry over the declared legacy types.
pub fn global() -> &'static TypeNameRegistry {
    &REGISTRY
}

pub fn parse_type_name(name: &str) -> Result<TypeDescriptor> {
    REGISTRY.parse(name)
}

pub fn options_from_string(name: &str) -> Result<TensorOptions> {
    REGISTRY.options_from_string(name)
}

pub fn set_default_tensor_type_from_str(name: &str) -> Result<()> {
    REGISTRY.set_default_tensor_type_from_str(name)
}

impl FromStr for TypeDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_type_name(s)
    }
}
