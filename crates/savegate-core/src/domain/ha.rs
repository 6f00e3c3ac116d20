//! High-availability settings carried in the cluster's free-form properties.

use std::collections::BTreeMap;

/// Free-form cluster configuration properties (key -> value).
pub type ClusterProperties = BTreeMap<String, String>;

pub const HA_TYPE_KEY: &str = "high-availability";
pub const HA_STORAGE_DIR_KEY: &str = "high-availability.storageDir";
pub const HA_CLUSTER_ID_KEY: &str = "kubernetes.cluster-id";

/// HA is enabled when the type is set (and not `none`), and both the cluster
/// id and the storage directory are non-blank.
pub fn is_high_availability_enabled(properties: Option<&ClusterProperties>) -> bool {
    let Some(properties) = properties else {
        return false;
    };
    match properties.get(HA_TYPE_KEY) {
        Some(kind) if !kind.eq_ignore_ascii_case("none") => {}
        _ => return false,
    }
    is_present(properties, HA_CLUSTER_ID_KEY) && is_present(properties, HA_STORAGE_DIR_KEY)
}

/// Name of the config map holding HA metadata, empty when HA is disabled.
pub fn ha_config_map_name(properties: Option<&ClusterProperties>) -> String {
    if !is_high_availability_enabled(properties) {
        return String::new();
    }
    properties
        .and_then(|p| p.get(HA_CLUSTER_ID_KEY))
        .map(|cluster_id| format!("{cluster_id}-cluster-config-map"))
        .unwrap_or_default()
}

fn is_present(properties: &ClusterProperties, key: &str) -> bool {
    properties
        .get(key)
        .is_some_and(|v| !v.trim().is_empty())
}
