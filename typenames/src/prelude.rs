pub use crate::{
    config::TypeConfig,
    declared::{all_declared_types, DeclaredTypes, TypeSource},
    defaults::{default_tensor_type, set_default_dtype, set_default_tensor_type, TypeDefaults},
    error::{Error, Result},
    registry::{options_from_string, parse_type_name, TypeNameRegistry},
    textual::{options_to_string, type_to_string, ToTextual},
    types::*,
};
