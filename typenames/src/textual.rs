//! Textual representation of legacy tensor types.

use crate::types::{Backend, TensorOptions, TypeDescriptor};

/// Name that always resolves to the default tensor type.
pub const DEFAULT_TYPE_NAME: &str = "torch.Tensor";

/// Names with this prefix belong to the CUDA family.
pub const CUDA_PREFIX: &str = "torch.cuda.";

const TENSOR_SUFFIX: &str = "Tensor";

/// A serializer to produce the canonical dotted name of a type
pub trait ToTextual {
    fn to_textual(&self) -> String;
}

/// Module path under which tensor types of `backend` live.
///
/// # Panics
///
/// Panics on backends without a legacy namespace. Reaching this is a bug in
/// the caller, not a condition to recover from.
pub fn backend_namespace(backend: Backend) -> &'static str {
    match backend {
        Backend::CPU => "torch",
        Backend::CUDA => "torch.cuda",
        Backend::XPU => "torch.xpu",
        Backend::SparseCPU => "torch.sparse",
        Backend::SparseCUDA => "torch.cuda.sparse",
        Backend::SparseXPU => "torch.xpu.sparse",
        Backend::QuantizedCPU => "torch.quantized",
        Backend::HPU => "torch.hpu",
        _ => panic!("Unimplemented backend {}", backend),
    }
}

pub fn type_to_string(desc: &TypeDescriptor) -> String {
    format!(
        "{}.{}{}",
        backend_namespace(desc.backend()),
        desc.scalar_type().short_name(),
        TENSOR_SUFFIX
    )
}

pub fn options_to_string(options: &TensorOptions) -> String {
    type_to_string(&options.descriptor())
}

impl ToTextual for TypeDescriptor {
    fn to_textual(&self) -> String {
        type_to_string(self)
    }
}

impl ToTextual for TensorOptions {
    fn to_textual(&self) -> String {
        options_to_string(self)
    }
}
