use log::trace;

use crate::handles::{
    CallableStatement, CallableStatementHandle, Connection, ConnectionHandle, PreparedStatement,
    PreparedStatementHandle, ResourceKind, ResultSet, ResultSetHandle, Statement, StatementHandle,
    innermost,
};

use super::NativeExtractor;

/// Extractor for pools whose proxies only know their direct delegate.
///
/// Any handle exposing a delegate is treated as a wrapper, no matter which pool it stems from. The
/// chain is walked one delegate at a time, until a handle without delegate is reached. Walks are
/// bounded by [`crate::handles::MAX_DELEGATE_DEPTH`], so a cyclic chain can not hang the
/// application.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelegateWalkExtractor {
    native_connection_for_statements: bool,
}

impl DelegateWalkExtractor {
    /// Extractor which does not need the native connection to create statements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set to `true` for pools which only track the innermost delegate of connections. See
    /// [`NativeExtractor::needs_native_connection_for_statements`]. Default is `false`.
    pub fn with_native_connection_for_statements(mut self, necessary: bool) -> Self {
        self.native_connection_for_statements = necessary;
        self
    }
}

impl NativeExtractor for DelegateWalkExtractor {
    fn needs_native_connection_for_statements(&self) -> bool {
        self.native_connection_for_statements
    }

    fn extract_connection(&self, con: ConnectionHandle) -> ConnectionHandle {
        trace!("Walking delegates of connection.");
        innermost(con, ResourceKind::Connection, |con| con.delegate())
    }

    fn extract_statement(&self, stmt: StatementHandle) -> StatementHandle {
        trace!("Walking delegates of statement.");
        innermost(stmt, ResourceKind::Statement, |stmt| stmt.delegate())
    }

    fn extract_prepared_statement(&self, ps: PreparedStatementHandle) -> PreparedStatementHandle {
        trace!("Walking delegates of prepared statement.");
        innermost(ps, ResourceKind::PreparedStatement, |ps| {
            ps.prepared_delegate()
        })
    }

    fn extract_callable_statement(&self, cs: CallableStatementHandle) -> CallableStatementHandle {
        trace!("Walking delegates of callable statement.");
        innermost(cs, ResourceKind::CallableStatement, |cs| {
            cs.callable_delegate()
        })
    }

    fn extract_result_set(&self, rs: ResultSetHandle) -> ResultSetHandle {
        trace!("Walking delegates of result set.");
        innermost(rs, ResourceKind::ResultSet, |rs| rs.delegate())
    }
}
