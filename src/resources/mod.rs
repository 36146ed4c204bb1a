//! Smaug resources and their sub-clients.
//!
//! | Sub-client | Collection | Operations |
//! |------------|------------|------------|
//! | [`PlansClient`] | `/plans` | list, create, get, update, delete |
//! | [`ScheduledOperationsClient`] | `/scheduled_operations` | list, create, get, delete |
//! | [`RestoresClient`] | `/restores` | list, create, get, delete |
//! | [`ProvidersClient`] | `/providers` | list, get |
//! | [`CheckpointsClient`] | `/providers/{id}/checkpoints` | list, create, get, delete |
//! | [`TriggersClient`] | `/triggers` | list, create, get, delete |
//! | [`ProtectablesClient`] | `/protectables` | list types, get type, instances |
//!
//! Every collection offers `list()` for a single pass-through call and
//! `list_paged()` for a [`PagedList`](crate::PagedList) with navigation
//! flags. `collection()` exposes the underlying [`ResourceList`] for code
//! that drives pagination itself, such as [`crate::view::ListView`].

mod checkpoints;
mod collection;
mod plans;
mod protectables;
mod providers;
mod restores;
mod scheduled_operations;
mod triggers;

pub use checkpoints::{Checkpoint, CheckpointsClient, ProtectionPlanSummary};
pub use collection::{ListRequest, PagedListRequest, ResourceList};
pub use plans::{CreatePlanRequest, Plan, PlansClient, Resource, UpdatePlanRequest};
pub use protectables::{
    ProtectableInstance, ProtectableInstancesClient, ProtectableType, ProtectablesClient,
};
pub use providers::{Provider, ProvidersClient};
pub use restores::{CreateRestoreRequest, Restore, RestoresClient};
pub use scheduled_operations::{
    CreateScheduledOperationRequest, ScheduledOperation, ScheduledOperationsClient,
};
pub use triggers::{CreateTriggerRequest, Trigger, TriggersClient};
