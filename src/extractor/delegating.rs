use std::any::Any;

use log::{debug, trace};

use crate::{
    delegating::{
        DelegatingCallableStatement, DelegatingConnection, DelegatingPreparedStatement,
        DelegatingResultSet, DelegatingStatement,
    },
    handles::{
        CallableStatementHandle, ConnectionHandle, PreparedStatementHandle, ResourceKind,
        ResultSetHandle, StatementHandle,
    },
};

use super::NativeExtractor;

/// Extractor for pools handing out the proxies of [`crate::delegating`].
///
/// Proxies are recognized by their concrete type. Each of them already knows its innermost
/// delegate, so extracting takes a single call, no matter how deep the chain is.
///
/// Any other handle is returned as is. This makes it safe to configure this extractor for an
/// application which does not use the delegating pool at all (yet).
#[derive(Debug, Clone, Copy, Default)]
pub struct DelegatingExtractor;

impl DelegatingExtractor {
    /// Same as [`DelegatingExtractor::default`].
    pub fn new() -> Self {
        Self
    }
}

/// The proxy behind `handle`, if `handle` is one of type `P`.
fn recognize<P: Any>(handle: &dyn Any) -> Option<&P> {
    handle.downcast_ref::<P>()
}

fn unwrapped<H>(kind: ResourceKind, native: H) -> H {
    debug!("Extracted native {kind} from its pool proxy.");
    native
}

fn passed_through<H>(kind: ResourceKind, handle: H) -> H {
    trace!("Handle is not a delegating {kind} proxy. Returning it unchanged.");
    handle
}

impl NativeExtractor for DelegatingExtractor {
    fn needs_native_connection_for_statements(&self) -> bool {
        false
    }

    fn extract_connection(&self, con: ConnectionHandle) -> ConnectionHandle {
        if let Some(proxy) = recognize::<DelegatingConnection>(&*con) {
            return unwrapped(ResourceKind::Connection, proxy.innermost_delegate());
        }
        passed_through(ResourceKind::Connection, con)
    }

    /// Prepared and callable statement proxies are statements, too. They are unwrapped by this
    /// entrypoint as well.
    fn extract_statement(&self, stmt: StatementHandle) -> StatementHandle {
        if let Some(proxy) = recognize::<DelegatingStatement>(&*stmt) {
            return unwrapped(ResourceKind::Statement, proxy.innermost_delegate());
        }
        if let Some(proxy) = recognize::<DelegatingPreparedStatement>(&*stmt) {
            let native = proxy.innermost_delegate() as StatementHandle;
            return unwrapped(ResourceKind::PreparedStatement, native);
        }
        if let Some(proxy) = recognize::<DelegatingCallableStatement>(&*stmt) {
            let native = proxy.innermost_delegate() as StatementHandle;
            return unwrapped(ResourceKind::CallableStatement, native);
        }
        passed_through(ResourceKind::Statement, stmt)
    }

    /// Also unwraps callable statement proxies.
    fn extract_prepared_statement(&self, ps: PreparedStatementHandle) -> PreparedStatementHandle {
        if let Some(proxy) = recognize::<DelegatingPreparedStatement>(&*ps) {
            return unwrapped(ResourceKind::PreparedStatement, proxy.innermost_delegate());
        }
        if let Some(proxy) = recognize::<DelegatingCallableStatement>(&*ps) {
            let native = proxy.innermost_delegate() as PreparedStatementHandle;
            return unwrapped(ResourceKind::CallableStatement, native);
        }
        passed_through(ResourceKind::PreparedStatement, ps)
    }

    fn extract_callable_statement(&self, cs: CallableStatementHandle) -> CallableStatementHandle {
        if let Some(proxy) = recognize::<DelegatingCallableStatement>(&*cs) {
            return unwrapped(ResourceKind::CallableStatement, proxy.innermost_delegate());
        }
        passed_through(ResourceKind::CallableStatement, cs)
    }

    fn extract_result_set(&self, rs: ResultSetHandle) -> ResultSetHandle {
        if let Some(proxy) = recognize::<DelegatingResultSet>(&*rs) {
            return unwrapped(ResourceKind::ResultSet, proxy.innermost_delegate());
        }
        passed_through(ResourceKind::ResultSet, rs)
    }
}
