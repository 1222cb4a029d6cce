use crate::errors::{DataKind, LoadError, LoadResult};
use log::info;
use schema::{Group, TypeMap};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Load the group list, in file order.
pub fn load_groups(path: &Path) -> LoadResult<Vec<Group>> {
    let groups: Vec<Group> = load_json(path, DataKind::Pokemon)?;
    info!("Loaded {} groups from {}", groups.len(), path.display());
    Ok(groups)
}

/// Load the type table.
pub fn load_types(path: &Path) -> LoadResult<TypeMap> {
    let types: TypeMap = load_json(path, DataKind::Types)?;
    info!("Loaded {} types from {}", types.len(), path.display());
    Ok(types)
}

fn load_json<T: DeserializeOwned>(path: &Path, kind: DataKind) -> LoadResult<T> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Schema {
        kind,
        path: path.to_path_buf(),
        source,
    })
}
