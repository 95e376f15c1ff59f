//! Process-wide API version selection
//!
//! Registered tables and the active selection live behind one owning
//! registry. A render call takes a single `Arc` snapshot of the active table,
//! so switching versions mid-call never changes the rules that call uses.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use super::api3;
use super::renderer::ApiTable;
use crate::error::RenderError;

struct Registry {
    tables: RwLock<HashMap<u32, Arc<ApiTable>>>,
    active: RwLock<Option<Arc<ApiTable>>>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let mut tables = HashMap::new();
    tables.insert(api3::VERSION, Arc::new(api3::table()));
    Registry {
        tables: RwLock::new(tables),
        active: RwLock::new(None),
    }
});

/// Select the API version used by all subsequent render calls.
///
/// On failure the previous selection stays in place.
pub fn use_api(version: u32) -> Result<(), RenderError> {
    // lock order is always tables, then active
    let tables = REGISTRY.tables.read().unwrap_or_else(PoisonError::into_inner);
    let table = tables
        .get(&version)
        .cloned()
        .ok_or(RenderError::UnsupportedVersion(version))?;
    let mut active = REGISTRY.active.write().unwrap_or_else(PoisonError::into_inner);
    *active = Some(table);
    drop(active);
    drop(tables);
    tracing::debug!("using Google Maps API version {}", version);
    Ok(())
}

/// Register (or replace) the renderer table for `table.version()`.
///
/// If that version is active, the new table takes effect for later calls.
pub fn register_api(table: ApiTable) {
    let version = table.version();
    let table = Arc::new(table);
    let mut tables = REGISTRY.tables.write().unwrap_or_else(PoisonError::into_inner);
    let mut active = REGISTRY.active.write().unwrap_or_else(PoisonError::into_inner);
    tables.insert(version, Arc::clone(&table));
    if active.as_ref().is_some_and(|t| t.version() == version) {
        *active = Some(table);
    }
    drop(active);
    drop(tables);
    tracing::debug!("registered Google Maps API version {}", version);
}

/// Snapshot of the active table
pub fn active_api() -> Result<Arc<ApiTable>, RenderError> {
    REGISTRY
        .active
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(RenderError::NoActiveVersion)
}

pub fn active_version() -> Option<u32> {
    REGISTRY
        .active
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(|t| t.version())
}

pub fn registered_versions() -> Vec<u32> {
    let tables = REGISTRY.tables.read().unwrap_or_else(PoisonError::into_inner);
    let mut versions: Vec<u32> = tables.keys().copied().collect();
    versions.sort_unstable();
    versions
}

pub(crate) fn registered(version: u32) -> Result<Arc<ApiTable>, RenderError> {
    REGISTRY
        .tables
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&version)
        .cloned()
        .ok_or(RenderError::UnsupportedVersion(version))
}
