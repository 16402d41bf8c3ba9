//! Resource interfaces shared by native driver objects and the proxies wrapping them.
//!
//! Two decisions are already baked into this module:
//!
//! * Handles are shared trait objects (e.g. `Arc<dyn Connection>`). Two handles are the same
//!   resource, if they point to the same object.
//! * Wrappers expose the handle they forward to via a single step `delegate` accessor. Native
//!   objects just keep the default implementation returning `None`.

mod delegate_chain;
mod resource;
mod resource_kind;

pub use {
    delegate_chain::{MAX_DELEGATE_DEPTH, innermost, same_handle},
    resource::{
        CallableStatement, CallableStatementHandle, Connection, ConnectionHandle,
        PreparedStatement, PreparedStatementHandle, ResultSet, ResultSetHandle, Statement,
        StatementHandle,
    },
    resource_kind::ResourceKind,
};
