//! Data-fetching hooks.
//!
//! Every list hook owns its own [`ListState`]; nothing is shared between
//! consumers. The returned fields combine as follows:
//!
//! | is_loading | error   | data     | meaning                                  |
//! |------------|---------|----------|------------------------------------------|
//! | true       | None    | empty    | first load in flight                     |
//! | true       | None    | items    | refetch in flight, previous items shown  |
//! | false      | None    | any      | last cycle succeeded                     |
//! | false      | Some    | items    | refetch failed, stale items kept         |
//! | false      | Some    | empty    | failed with nothing (or nothing kept)    |
//!
//! `error` is always a fixed display message; causes are only logged.

pub mod list_state;
pub mod use_centers;
pub mod use_fetch;
pub mod use_formations;
pub mod use_vehicles;

pub use list_state::{
    Epoch, EpochCounter, FailurePolicy, ListAction, ListState,
};
pub use use_centers::{CentersHookReturn, use_centers};
pub use use_fetch::{
    CycleTask, FetchCycles, FetchOptions, ListHookReturn, settle, use_list_fetch,
};
pub use use_formations::use_formations;
pub use use_vehicles::use_vehicles;
