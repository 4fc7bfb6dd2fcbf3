//! Turns a [`PatchTarget`] into a patchable entry point, one lookup at a
//! time. Every step can come up empty without that being fatal: the target
//! is skipped and the rest of the batch still runs.

use thiserror::Error;

use crate::host::{EntryPointRef, ModRegistry, Reflection};
use crate::registry::PatchTarget;

/// Why one target could not be resolved. A missing mod is the normal case
/// for optional content; the other three mean the target mod's internals
/// changed shape since the table was written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("mod {module} not found, skipping {type_name}.{accessor}")]
    ModNotFound {
        module: String,
        type_name: String,
        accessor: String,
    },

    #[error("type {type_name} not found in {module}")]
    TypeNotFound { module: String, type_name: String },

    #[error("accessor {accessor} not found in {type_name}")]
    AccessorNotFound {
        type_name: String,
        accessor: String,
    },

    #[error("getter for {accessor} not found in {type_name}")]
    GetterNotFound {
        type_name: String,
        accessor: String,
    },
}

impl ResolveError {
    /// `true` for failures that are expected in a normal session and only
    /// worth an informational log.
    pub fn is_expected(&self) -> bool {
        matches!(self, ResolveError::ModNotFound { .. })
    }
}

/// Resolves `target` down to the getter entry point that should be patched.
pub fn resolve_entry_point(
    mods: &dyn ModRegistry,
    reflection: &dyn Reflection,
    target: &PatchTarget,
) -> Result<EntryPointRef, ResolveError> {
    let module = mods
        .try_get_mod(target.module)
        .ok_or_else(|| ResolveError::ModNotFound {
            module: target.module.to_string(),
            type_name: target.type_name.to_string(),
            accessor: target.accessor.to_string(),
        })?;

    let ty = reflection
        .get_type(module, target.type_name)
        .ok_or_else(|| ResolveError::TypeNotFound {
            module: target.module.to_string(),
            type_name: target.type_name.to_string(),
        })?;

    let accessor = reflection
        .get_accessor(ty, target.accessor)
        .ok_or_else(|| ResolveError::AccessorNotFound {
            type_name: target.type_name.to_string(),
            accessor: target.accessor.to_string(),
        })?;

    reflection
        .read_entry_point(accessor)
        .ok_or_else(|| ResolveError::GetterNotFound {
            type_name: target.type_name.to_string(),
            accessor: target.accessor.to_string(),
        })
}
