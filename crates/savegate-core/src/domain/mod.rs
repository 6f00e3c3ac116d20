//! Domain model (job state, status, spec, HA properties, timestamps).

pub mod ha;
pub mod spec;
pub mod state;
pub mod status;
pub mod time;

pub use ha::{
    ClusterProperties, HA_CLUSTER_ID_KEY, HA_STORAGE_DIR_KEY, HA_TYPE_KEY, ha_config_map_name,
    is_high_availability_enabled,
};
pub use spec::{JobSpec, RestartPolicy};
pub use state::{JobState, StateCategory};
pub use status::{JobStatus, RevisionStatus, SavepointState, SavepointStatus};
