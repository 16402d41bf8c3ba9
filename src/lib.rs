//! # Native handles
//!
//! Connection pools hand out proxies instead of the connections, statements and result sets
//! created by the database driver. The proxies take care of the lifecycle accounting of the pool,
//! but hide everything the driver offers beyond the generic resource interfaces. This library
//! allows you to get back to the native driver objects, without giving up on pooling.
//!
//! ```
//! use native_handles::{ExtractorKind, NativeAccess};
//!
//! let access = NativeAccess::new("delegating".parse::<ExtractorKind>()?.extractor());
//! assert!(!access.connection_first());
//! # Ok::<(), native_handles::Error>(())
//! ```

mod error;
mod extractor;
mod extractor_kind;
mod native_access;

pub mod delegating;
pub mod handles;

pub use self::{
    error::Error,
    extractor::{
        DelegateWalkExtractor, DelegatingExtractor, NativeExtractor, PassThroughExtractor,
    },
    extractor_kind::ExtractorKind,
    handles::{
        CallableStatement, CallableStatementHandle, Connection, ConnectionHandle,
        PreparedStatement, PreparedStatementHandle, ResourceKind, ResultSet, ResultSetHandle,
        Statement, StatementHandle,
    },
    native_access::NativeAccess,
};
