//! Prelude module for convenient imports.
//!
//! ```rust
//! use smaug::prelude::*;
//! ```
//!
//! This provides access to:
//! - Client and builder types
//! - Error types
//! - Credentials and configuration
//! - Pagination and view types
//! - Resource records

pub use crate::{
    auth::TokenCredentials,
    client::{Client, ClientBuilder},
    config::{PageSizePolicy, PaginationConfig, ServiceConfig, TlsConfig},
    error::{Error, ErrorKind, Result},
    pagination::{Identified, ListSource, PagedList, SortField, SortOrder},
    resources::{
        Checkpoint, CreatePlanRequest, CreateRestoreRequest, CreateScheduledOperationRequest,
        CreateTriggerRequest, Plan, ProtectableInstance, ProtectableType, Provider, Resource,
        Restore, ScheduledOperation, Trigger, UpdatePlanRequest,
    },
    view::{Cursor, ListView, PaginationParams, TableData},
};
