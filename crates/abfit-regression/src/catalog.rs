//! Registry of regression methods
//!
//! The catalog is an explicit value handed to the orchestration layer,
//! enumerable in insertion order so UI callers can populate method pickers
//! deterministically. It is immutable once populated and cheap to share.

use crate::types::MethodKind;
use abfit_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A catalog entry: a unique short id, a display label, and the method it
/// dispatches to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub id: String,
    pub display_name: String,
    pub kind: MethodKind,
}

impl MethodDescriptor {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, kind: MethodKind) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            kind,
        }
    }

    /// Descriptor with the method's canonical acronym and label.
    pub fn builtin(kind: MethodKind) -> Self {
        Self::new(kind.acronym(), kind.display_name(), kind)
    }
}

/// An insertion-ordered, id-unique collection of regression methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegressionCatalog {
    methods: Vec<MethodDescriptor>,
}

impl RegressionCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of built-in methods, in display order: Minimum Distance,
    /// Least Squares, Reduced Major Axis.
    pub fn builtin() -> Self {
        // Acronyms are distinct, so the id-uniqueness invariant holds by
        // construction.
        Self {
            methods: vec![
                MethodDescriptor::builtin(MethodKind::MinDistance),
                MethodDescriptor::builtin(MethodKind::LeastSquares),
                MethodDescriptor::builtin(MethodKind::ReducedMajorAxis),
            ],
        }
    }

    /// Add a descriptor; fails with [`Error::DuplicateMethod`] when its id
    /// is already registered.
    pub fn register(&mut self, descriptor: MethodDescriptor) -> Result<()> {
        if self.methods.iter().any(|m| m.id == descriptor.id) {
            return Err(Error::DuplicateMethod(descriptor.id));
        }
        self.methods.push(descriptor);
        Ok(())
    }

    /// All registered descriptors in insertion order.
    pub fn all(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Look up a descriptor by id.
    pub fn by_id(&self, id: &str) -> Result<&MethodDescriptor> {
        self.methods
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| Error::UnknownMethod(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
