//! Recognized backends, scalar types and legacy type descriptors

use crate::error::{Error, Result};
use crate::textual::CUDA_PREFIX;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declares a closed enum whose canonical name is the variant identifier.
macro_rules! named_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident,)+ }) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone, Debug, Display)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn short_name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_name(s).ok_or_else(|| {
                    Error::InvalidArgument(format!("unknown {} '{}'", stringify!($name), s))
                })
            }
        }
    };
}

named_enum!(
    /// Where and how a tensor's storage lives.
    Backend {
        CPU,
        CUDA,
        HIP,
        XPU,
        SparseCPU,
        SparseCUDA,
        SparseHIP,
        SparseXPU,
        QuantizedCPU,
        QuantizedCUDA,
        MkldnnCPU,
        XLA,
        Vulkan,
        Metal,
        Meta,
        HPU,
        Lazy,
        Undefined,
    }
);

named_enum!(
    /// Scalar kind stored in a tensor.
    ScalarType {
        /// uint8
        Byte,
        /// int8
        Char,
        Short,
        Int,
        /// int64
        Long,
        Half,
        /// float32
        Float,
        Double,
        ComplexHalf,
        ComplexFloat,
        ComplexDouble,
        Bool,
        QInt8,
        QUInt8,
        QInt32,
        BFloat16,
        QUInt4x2,
    }
);

/// Partition of backends used to pick a reverse-lookup table.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, Display)]
pub enum BackendFamily {
    Cpu,
    Cuda,
}

impl BackendFamily {
    /// Family whose lookup table is consulted for the type called `name`.
    pub fn of_name(name: &str) -> BackendFamily {
        if name.starts_with(CUDA_PREFIX) {
            BackendFamily::Cuda
        } else {
            BackendFamily::Cpu
        }
    }
}

impl Backend {
    pub fn is_sparse(&self) -> bool {
        matches!(
            self,
            Backend::SparseCPU | Backend::SparseCUDA | Backend::SparseHIP | Backend::SparseXPU
        )
    }

    pub fn is_quantized(&self) -> bool {
        matches!(self, Backend::QuantizedCPU | Backend::QuantizedCUDA)
    }

    /// The family whose lookup table holds names for this backend, if any.
    pub fn family(&self) -> Option<BackendFamily> {
        match self {
            Backend::CPU | Backend::SparseCPU => Some(BackendFamily::Cpu),
            Backend::CUDA | Backend::SparseCUDA => Some(BackendFamily::Cuda),
            _ => None,
        }
    }
}

impl ScalarType {
    /// Size in bytes of a single element.
    pub fn element_size(&self) -> usize {
        match self {
            ScalarType::Byte
            | ScalarType::Char
            | ScalarType::Bool
            | ScalarType::QInt8
            | ScalarType::QUInt8
            | ScalarType::QUInt4x2 => 1,
            ScalarType::Short | ScalarType::Half | ScalarType::BFloat16 => 2,
            ScalarType::Int
            | ScalarType::Float
            | ScalarType::QInt32
            | ScalarType::ComplexHalf => 4,
            ScalarType::Long | ScalarType::Double | ScalarType::ComplexFloat => 8,
            ScalarType::ComplexDouble => 16,
        }
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(
            self,
            ScalarType::Half | ScalarType::Float | ScalarType::Double | ScalarType::BFloat16
        )
    }

    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            ScalarType::ComplexHalf | ScalarType::ComplexFloat | ScalarType::ComplexDouble
        )
    }

    pub fn is_quantized(&self) -> bool {
        matches!(
            self,
            ScalarType::QInt8 | ScalarType::QUInt8 | ScalarType::QInt32 | ScalarType::QUInt4x2
        )
    }
}

/// A legacy tensor type: the pairing of a backend with a scalar type.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct TypeDescriptor {
    backend: Backend,
    scalar_type: ScalarType,
}

impl TypeDescriptor {
    pub const fn new(backend: Backend, scalar_type: ScalarType) -> Self {
        TypeDescriptor {
            backend,
            scalar_type,
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    pub fn options(&self) -> TensorOptions {
        TensorOptions::from(*self)
    }
}

impl From<(Backend, ScalarType)> for TypeDescriptor {
    fn from((backend, scalar_type): (Backend, ScalarType)) -> Self {
        TypeDescriptor::new(backend, scalar_type)
    }
}

impl From<TypeDescriptor> for (Backend, ScalarType) {
    fn from(desc: TypeDescriptor) -> Self {
        (desc.backend, desc.scalar_type)
    }
}

/// Options used when constructing a tensor.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct TensorOptions {
    pub backend: Backend,
    pub dtype: ScalarType,
    pub requires_grad: bool,
}

impl TensorOptions {
    pub fn requires_grad(self, requires_grad: bool) -> Self {
        TensorOptions {
            requires_grad,
            ..self
        }
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new(self.backend, self.dtype)
    }
}

impl From<TypeDescriptor> for TensorOptions {
    fn from(desc: TypeDescriptor) -> Self {
        TensorOptions {
            backend: desc.backend,
            dtype: desc.scalar_type,
            requires_grad: false,
        }
    }
}
