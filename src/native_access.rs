use std::sync::Arc;

use log::debug;

use crate::{
    Error,
    extractor::NativeExtractor,
    handles::{
        CallableStatement, Connection, ConnectionHandle, PreparedStatement, ResultSet,
        ResultSetHandle, Statement,
    },
};

/// Runs work against native driver objects, while the resources are obtained from (and returned
/// to) a connection pool.
///
/// Holds exactly one extractor for its entire lifetime. Whether statements are created on the
/// native connection, or extracted after being created on the pooled one, is decided once at
/// construction by asking the extractor.
///
/// Statements are always closed through the handle they have been created with, so the pool gets
/// to do its bookkeeping. Only the closures get to see the native objects.
pub struct NativeAccess {
    extractor: Arc<dyn NativeExtractor>,
    /// Cached [`NativeExtractor::needs_native_connection_for_statements`].
    connection_first: bool,
}

impl NativeAccess {
    /// Asks `extractor` once whether statements have to be created on the native connection.
    pub fn new(extractor: Arc<dyn NativeExtractor>) -> Self {
        let connection_first = extractor.needs_native_connection_for_statements();
        debug!(
            "Configured native handle access. Create statements on native connection: \
            {connection_first}"
        );
        Self {
            extractor,
            connection_first,
        }
    }

    /// The extractor this instance has been configured with.
    pub fn extractor(&self) -> &dyn NativeExtractor {
        &*self.extractor
    }

    /// `true` if statements are created on the native connection.
    pub fn connection_first(&self) -> bool {
        self.connection_first
    }

    /// The native connection behind `con`.
    pub fn native_connection(&self, con: &ConnectionHandle) -> ConnectionHandle {
        self.extractor.extract_connection(con.clone())
    }

    /// The native connection to use for vendor specific work related to `stmt`.
    ///
    /// # Errors
    ///
    /// Fails if `stmt` can not tell its connection, e.g. because it has been closed.
    pub fn statement_connection(&self, stmt: &dyn Statement) -> Result<ConnectionHandle, Error> {
        self.extractor.extract_connection_from_statement(stmt)
    }

    /// The native result set behind `rs`.
    pub fn native_result_set(&self, rs: ResultSetHandle) -> ResultSetHandle {
        self.extractor.extract_result_set(rs)
    }

    /// Creates a statement on `con`, and passes the native statement to `f`. The statement is
    /// closed afterwards.
    pub fn with_statement<T>(
        &self,
        con: &ConnectionHandle,
        f: impl FnOnce(&dyn Statement) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let stmt = self.connection_to_use(con).create_statement()?;
        let native = self.extractor.extract_statement(stmt.clone());
        let outcome = f(&*native);
        finish(outcome, stmt.close())
    }

    /// Prepares `sql` on `con`, and passes the native prepared statement to `f`. The statement is
    /// closed afterwards.
    pub fn with_prepared_statement<T>(
        &self,
        con: &ConnectionHandle,
        sql: &str,
        f: impl FnOnce(&dyn PreparedStatement) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let ps = self.connection_to_use(con).prepare_statement(sql)?;
        let native = self.extractor.extract_prepared_statement(ps.clone());
        let outcome = f(&*native);
        finish(outcome, ps.close())
    }

    /// Prepares the stored procedure call `sql` on `con`, and passes the native callable statement
    /// to `f`. The statement is closed afterwards.
    pub fn with_callable_statement<T>(
        &self,
        con: &ConnectionHandle,
        sql: &str,
        f: impl FnOnce(&dyn CallableStatement) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let cs = self.connection_to_use(con).prepare_call(sql)?;
        let native = self.extractor.extract_callable_statement(cs.clone());
        let outcome = f(&*native);
        finish(outcome, cs.close())
    }

    /// Executes `sql` on `con` and passes the native result set to `f`. Result set and statement
    /// are closed afterwards.
    pub fn query<T>(
        &self,
        con: &ConnectionHandle,
        sql: &str,
        f: impl FnOnce(&dyn ResultSet) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.with_statement(con, |stmt| {
            let rs = stmt.execute_query(sql)?;
            let native = self.extractor.extract_result_set(rs.clone());
            let outcome = f(&*native);
            finish(outcome, rs.close())
        })
    }

    fn connection_to_use(&self, con: &ConnectionHandle) -> ConnectionHandle {
        if self.connection_first {
            self.extractor.extract_connection(con.clone())
        } else {
            con.clone()
        }
    }
}

/// An error of the work itself takes precedence over one emitted while closing.
fn finish<T>(outcome: Result<T, Error>, closed: Result<(), Error>) -> Result<T, Error> {
    let value = outcome?;
    closed?;
    Ok(value)
}
