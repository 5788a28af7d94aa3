//! Handler descriptors.
//!
//! # Responsibilities
//! - Name a handler type and carry its zero-argument factory
//! - Represent routes that are recognized but deliberately unmapped
//!
//! # Design Decisions
//! - A plain `fn` pointer per handler type; no runtime type introspection
//! - Panics inside a factory are caught and reported as construction errors

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::action::AutomatedAction;
use crate::registry::error::ConstructionError;

/// Zero-argument constructor for a boxed handler.
pub type ActionFactory = fn() -> Result<Box<dyn AutomatedAction>, ConstructionError>;

/// What a route identifier resolves to.
#[derive(Debug, Clone, Copy)]
pub enum HandlerDescriptor {
    /// A constructible handler type.
    Handler {
        name: &'static str,
        factory: ActionFactory,
    },
    /// Recognized identifier with no implementation behind it.
    Unmapped,
}

impl HandlerDescriptor {
    /// Descriptor for a default-constructible handler type.
    pub fn of<T>() -> Self
    where
        T: AutomatedAction + Default + 'static,
    {
        Self::Handler {
            name: short_type_name::<T>(),
            factory: construct_default::<T>,
        }
    }

    /// Descriptor for a handler built by a custom factory.
    pub fn with_factory(name: &'static str, factory: ActionFactory) -> Self {
        Self::Handler { name, factory }
    }

    pub const fn unmapped() -> Self {
        Self::Unmapped
    }

    pub fn is_unmapped(&self) -> bool {
        matches!(self, Self::Unmapped)
    }

    /// Handler name, or `None` for the unmapped marker.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Handler { name, .. } => Some(*name),
            Self::Unmapped => None,
        }
    }

    /// Build a fresh handler instance.
    pub fn instantiate(&self) -> Result<Box<dyn AutomatedAction>, ConstructionError> {
        match *self {
            Self::Unmapped => Err(ConstructionError::Unmapped),
            Self::Handler { name, factory } => match catch_unwind(AssertUnwindSafe(factory)) {
                Ok(result) => result,
                Err(panic) => Err(ConstructionError::Panicked {
                    handler: name,
                    message: panic_message(&*panic),
                }),
            },
        }
    }
}

fn construct_default<T>() -> Result<Box<dyn AutomatedAction>, ConstructionError>
where
    T: AutomatedAction + Default + 'static,
{
    Ok(Box::new(T::default()))
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
