//! The legacy type system's declared (backend, scalar type) combinations.

use crate::types::{Backend, BackendFamily, ScalarType, TypeDescriptor};
use itertools::iproduct;

/// Backends with declared legacy types, in enumeration order.
pub const DECLARED_BACKENDS: [Backend; 4] = [
    Backend::CPU,
    Backend::CUDA,
    Backend::SparseCPU,
    Backend::SparseCUDA,
];

/// Scalar types usable for empty tensors: no quantized types, no ComplexHalf.
pub const DECLARED_SCALAR_TYPES: [ScalarType; 12] = [
    ScalarType::Byte,
    ScalarType::Char,
    ScalarType::Short,
    ScalarType::Int,
    ScalarType::Long,
    ScalarType::Half,
    ScalarType::Float,
    ScalarType::Double,
    ScalarType::ComplexFloat,
    ScalarType::ComplexDouble,
    ScalarType::Bool,
    ScalarType::BFloat16,
];

/// All declared legacy types, backends outermost.
///
/// There is no sparse bool type, so (SparseCPU, Bool) and (SparseCUDA, Bool)
/// are skipped.
pub fn all_declared_types() -> Vec<(Backend, ScalarType)> {
    iproduct!(
        DECLARED_BACKENDS.iter().copied(),
        DECLARED_SCALAR_TYPES.iter().copied()
    )
    .filter(|(backend, scalar_type)| {
        !(*scalar_type == ScalarType::Bool
            && matches!(backend, Backend::SparseCPU | Backend::SparseCUDA))
    })
    .collect()
}

/// Supplies the legacy types whose names a registry can parse.
pub trait TypeSource: Send + Sync {
    fn all_cpu_types(&self) -> Vec<TypeDescriptor>;

    fn all_cuda_types(&self) -> Vec<TypeDescriptor>;

    fn types_for(&self, family: BackendFamily) -> Vec<TypeDescriptor> {
        match family {
            BackendFamily::Cpu => self.all_cpu_types(),
            BackendFamily::Cuda => self.all_cuda_types(),
        }
    }
}

/// Type source backed by [`all_declared_types`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclaredTypes;

impl DeclaredTypes {
    fn family_types(family: BackendFamily) -> Vec<TypeDescriptor> {
        all_declared_types()
            .into_iter()
            .filter(|(backend, _)| backend.family() == Some(family))
            .map(TypeDescriptor::from)
            .collect()
    }
}

impl TypeSource for DeclaredTypes {
    fn all_cpu_types(&self) -> Vec<TypeDescriptor> {
        Self::family_types(BackendFamily::Cpu)
    }

    fn all_cuda_types(&self) -> Vec<TypeDescriptor> {
        Self::family_types(BackendFamily::Cuda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_count() {
        let types = all_declared_types();
        assert_eq!(
            types.len(),
            DECLARED_BACKENDS.len() * DECLARED_SCALAR_TYPES.len() - 2
        );
        assert_eq!(types.len(), 46);
    }

    #[test]
    fn test_no_sparse_bool() {
        let types = all_declared_types();
        assert!(!types.contains(&(Backend::SparseCPU, ScalarType::Bool)));
        assert!(!types.contains(&(Backend::SparseCUDA, ScalarType::Bool)));
        assert!(types.contains(&(Backend::CPU, ScalarType::Bool)));
        assert!(types.contains(&(Backend::CUDA, ScalarType::Bool)));
    }

    #[test]
    fn test_declared_order() {
        let types = all_declared_types();
        assert_eq!(types[0], (Backend::CPU, ScalarType::Byte));
        assert_eq!(types[11], (Backend::CPU, ScalarType::BFloat16));
        assert_eq!(types[12], (Backend::CUDA, ScalarType::Byte));
        // SparseCPU skips Bool, so BFloat16 directly follows ComplexDouble
        assert_eq!(types[33], (Backend::SparseCPU, ScalarType::ComplexDouble));
        assert_eq!(types[34], (Backend::SparseCPU, ScalarType::BFloat16));
        assert_eq!(types[35], (Backend::SparseCUDA, ScalarType::Byte));
        assert_eq!(types[45], (Backend::SparseCUDA, ScalarType::BFloat16));

        let backends: Vec<_> = types.iter().map(|(b, _)| *b).collect();
        let mut sorted = backends.clone();
        sorted.sort_by_key(|b| DECLARED_BACKENDS.iter().position(|d| d == b));
        assert_eq!(backends, sorted);
    }

    #[test]
    fn test_declared_excludes_quantized_and_complex_half() {
        assert!(all_declared_types()
            .iter()
            .all(|(_, t)| !t.is_quantized() && *t != ScalarType::ComplexHalf));
    }

    #[test]
    fn test_declared_types_source() {
        let source = DeclaredTypes;
        let cpu = source.all_cpu_types();
        let cuda = source.all_cuda_types();
        assert_eq!(cpu.len(), 23);
        assert_eq!(cuda.len(), 23);
        assert!(cpu
            .iter()
            .all(|d| d.backend().family() == Some(BackendFamily::Cpu)));
        assert!(cuda
            .iter()
            .all(|d| matches!(d.backend(), Backend::CUDA | Backend::SparseCUDA)));
        assert_eq!(source.types_for(BackendFamily::Cuda), cuda);
    }
}
