use crate::handles::{
    CallableStatementHandle, ConnectionHandle, PreparedStatementHandle, ResultSetHandle,
    StatementHandle,
};

use super::NativeExtractor;

/// Returns every handle unchanged. Use this if the application does not use a connection pool, or
/// if the pool hands out the native objects directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughExtractor;

impl NativeExtractor for PassThroughExtractor {
    fn needs_native_connection_for_statements(&self) -> bool {
        false
    }

    fn extract_connection(&self, con: ConnectionHandle) -> ConnectionHandle {
        con
    }

    fn extract_statement(&self, stmt: StatementHandle) -> StatementHandle {
        stmt
    }

    fn extract_prepared_statement(&self, ps: PreparedStatementHandle) -> PreparedStatementHandle {
        ps
    }

    fn extract_callable_statement(&self, cs: CallableStatementHandle) -> CallableStatementHandle {
        cs
    }

    fn extract_result_set(&self, rs: ResultSetHandle) -> ResultSetHandle {
        rs
    }
}
