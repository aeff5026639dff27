//! Default tensor type used to resolve `torch.Tensor`.

use crate::error::{Error, Result};
use crate::types::{Backend, ScalarType, TypeDescriptor};
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::sync::Arc;

pub const INITIAL_DEFAULT_TYPE: TypeDescriptor =
    TypeDescriptor::new(Backend::CPU, ScalarType::Float);

lazy_static! {
    static ref DEFAULTS: Arc<TypeDefaults> = Arc::new(TypeDefaults::default());
}

/// Holder of a default backend and scalar type.
///
/// Only dense, floating-point CPU or CUDA types are accepted, so the default
/// always has a canonical name.
#[derive(Debug)]
pub struct TypeDefaults {
    current: RwLock<TypeDescriptor>,
}

impl Default for TypeDefaults {
    fn default() -> Self {
        TypeDefaults::new(INITIAL_DEFAULT_TYPE)
    }
}

impl TypeDefaults {
    /// Creates a holder without validating `initial`.
    pub fn new(initial: TypeDescriptor) -> Self {
        TypeDefaults {
            current: RwLock::new(initial),
        }
    }

    /// The process-wide defaults.
    pub fn global() -> Arc<TypeDefaults> {
        Arc::clone(&*DEFAULTS)
    }

    pub fn get(&self) -> TypeDescriptor {
        *self.current.read()
    }

    pub fn backend(&self) -> Backend {
        self.get().backend()
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.get().scalar_type()
    }

    pub fn set(&self, desc: TypeDescriptor) -> Result<()> {
        check_backend(desc.backend())?;
        check_scalar_type(desc.scalar_type())?;
        let mut current = self.current.write();
        tracing::debug!("Default tensor type changed from {:?} to {:?}", *current, desc);
        *current = desc;
        Ok(())
    }

    pub fn set_scalar_type(&self, scalar_type: ScalarType) -> Result<()> {
        check_scalar_type(scalar_type)?;
        let mut current = self.current.write();
        let desc = TypeDescriptor::new(current.backend(), scalar_type);
        tracing::debug!("Default tensor type changed from {:?} to {:?}", *current, desc);
        *current = desc;
        Ok(())
    }
}

fn check_backend(backend: Backend) -> Result<()> {
    if backend == Backend::Undefined {
        return Err(Error::TypeError(
            "default type cannot be undefined".to_string(),
        ));
    }
    if backend.is_sparse() {
        return Err(Error::TypeError(
            "only dense types are supported as the default type".to_string(),
        ));
    }
    if backend.family().is_none() {
        return Err(Error::TypeError(format!(
            "{} types are not supported as the default type",
            backend
        )));
    }
    Ok(())
}

fn check_scalar_type(scalar_type: ScalarType) -> Result<()> {
    if !scalar_type.is_floating_point() {
        return Err(Error::TypeError(
            "only floating-point types are supported as the default type".to_string(),
        ));
    }
    Ok(())
}

/// The process-wide default tensor type.
pub fn default_tensor_type() -> TypeDescriptor {
    DEFAULTS.get()
}

pub fn set_default_tensor_type(desc: TypeDescriptor) -> Result<()> {
    DEFAULTS.set(desc)
}

pub fn set_default_dtype(scalar_type: ScalarType) -> Result<()> {
    DEFAULTS.set_scalar_type(scalar_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_initial_default() {
        let defaults = TypeDefaults::default();
        assert_eq!(defaults.backend(), Backend::CPU);
        assert_eq!(defaults.scalar_type(), ScalarType::Float);
    }

    #[test]
    fn test_set_default() -> Result<()> {
        let defaults = TypeDefaults::default();
        defaults.set(TypeDescriptor::new(Backend::CUDA, ScalarType::Double))?;
        assert_eq!(
            defaults.get(),
            TypeDescriptor::new(Backend::CUDA, ScalarType::Double)
        );
        defaults.set_scalar_type(ScalarType::Half)?;
        assert_eq!(
            defaults.get(),
            TypeDescriptor::new(Backend::CUDA, ScalarType::Half)
        );
        Ok(())
    }

    #[rstest]
    #[case(Backend::CPU, ScalarType::Long, "only floating-point types")]
    #[case(Backend::CUDA, ScalarType::ComplexFloat, "only floating-point types")]
    #[case(Backend::SparseCPU, ScalarType::Float, "only dense types")]
    #[case(Backend::Undefined, ScalarType::Float, "cannot be undefined")]
    #[case(Backend::Meta, ScalarType::Float, "Meta types are not supported")]
    #[case(Backend::QuantizedCPU, ScalarType::Float, "QuantizedCPU types are not supported")]
    #[case(Backend::XLA, ScalarType::Half, "XLA types are not supported")]
    fn test_rejected_default(
        #[case] backend: Backend,
        #[case] scalar_type: ScalarType,
        #[case] message: &str,
    ) {
        let defaults = TypeDefaults::default();
        match defaults.set(TypeDescriptor::new(backend, scalar_type)) {
            Err(Error::TypeError(msg)) => assert!(msg.contains(message), "{}", msg),
            other => panic!("expected a type error, got {:?}", other),
        }
        assert_eq!(defaults.get(), INITIAL_DEFAULT_TYPE);
    }

    #[test]
    fn test_rejected_dtype_keeps_backend() -> Result<()> {
        let defaults = TypeDefaults::default();
        defaults.set(TypeDescriptor::new(Backend::CUDA, ScalarType::Float))?;
        assert!(defaults.set_scalar_type(ScalarType::Bool).is_err());
        assert_eq!(
            defaults.get(),
            TypeDescriptor::new(Backend::CUDA, ScalarType::Float)
        );
        Ok(())
    }

    #[test]
    fn test_accepted_default_has_a_name() -> Result<()> {
        use crate::textual::type_to_string;
        let defaults = TypeDefaults::default();
        for backend in Backend::ALL {
            if defaults
                .set(TypeDescriptor::new(*backend, ScalarType::Float))
                .is_ok()
            {
                assert!(!type_to_string(&defaults.get()).is_empty());
            }
        }
        assert_eq!(defaults.backend(), Backend::CUDA);
        Ok(())
    }

    #[test]
    fn test_global_is_shared() {
        assert!(Arc::ptr_eq(&TypeDefaults::global(), &TypeDefaults::global()));
    }
}
