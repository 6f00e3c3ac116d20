//! savegate-core
//!
//! Lifecycle decisions for long-running streaming jobs.
//!
//! The reconciler hands us a status snapshot, the user's spec and a reference
//! time; we answer whether the job may be restarted, whether a pending update
//! may proceed, and whether the cluster's HA configuration is complete.
//! Nothing here performs I/O or reads the system clock on its own.
//!
//! # モジュール構成
//! - **domain**: 状態・スペック・HA プロパティなどの値型
//! - **policy**: 純粋関数による判定（classify / freshness / restart / update）
//! - **ports**: Clock の抽象化
//! - **report**: 1 回の reconcile 分の判定をまとめたビュー

pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;
pub mod report;

pub use domain::{
    ClusterProperties, JobSpec, JobState, JobStatus, RestartPolicy, RevisionStatus,
    SavepointState, SavepointStatus, StateCategory,
};
pub use error::SavegateError;
pub use policy::{
    is_active, is_failed, is_pending, is_savepoint_up_to_date, is_stopped, is_terminated,
    should_restart, update_ready,
};
pub use ports::{Clock, FixedClock, SystemClock};
pub use report::{JobSnapshot, LifecycleReport};
