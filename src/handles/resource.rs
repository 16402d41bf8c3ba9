use std::{any::Any, sync::Arc};

use crate::Error;

/// Shared handle to any connection, native or wrapped.
pub type ConnectionHandle = Arc<dyn Connection>;
/// Shared handle to any plain statement, native or wrapped.
pub type StatementHandle = Arc<dyn Statement>;
/// Shared handle to any prepared statement, native or wrapped.
pub type PreparedStatementHandle = Arc<dyn PreparedStatement>;
/// Shared handle to any callable statement, native or wrapped.
pub type CallableStatementHandle = Arc<dyn CallableStatement>;
/// Shared handle to any result set, native or wrapped.
pub type ResultSetHandle = Arc<dyn ResultSet>;

/// An open connection to a data source. Implemented by the connections of database drivers, as
/// well as by the proxies a connection pool hands out in their place.
///
/// Methods take `&self`, since handles are shared between the pool and the application. Any state
/// which changes (e.g. whether the connection is closed) is interior to the implementation.
pub trait Connection: Any + Send + Sync {
    /// Allocates a new statement for executing plain SQL text.
    fn create_statement(&self) -> Result<StatementHandle, Error>;

    /// Prepares `sql` for (repeated) execution.
    fn prepare_statement(&self, sql: &str) -> Result<PreparedStatementHandle, Error>;

    /// Prepares `sql` for calling a stored procedure.
    fn prepare_call(&self, sql: &str) -> Result<CallableStatementHandle, Error>;

    /// Closes the connection. For a pooled connection this returns the connection to the pool.
    fn close(&self) -> Result<(), Error>;

    /// `true` once [`Self::close`] has been called.
    fn is_closed(&self) -> bool;

    /// The connection this one forwards its operations to. `None` for native connections.
    fn delegate(&self) -> Option<ConnectionHandle> {
        None
    }
}

/// A statement executing plain SQL text.
pub trait Statement: Any + Send + Sync {
    /// The connection which created this statement.
    ///
    /// # Errors
    ///
    /// Most implementations fail, if the statement is already closed.
    fn connection(&self) -> Result<ConnectionHandle, Error>;

    /// Executes a query and returns its result set.
    fn execute_query(&self, sql: &str) -> Result<ResultSetHandle, Error>;

    /// Closes the statement and frees its resources in the driver.
    fn close(&self) -> Result<(), Error>;

    /// `true` once [`Self::close`] has been called.
    fn is_closed(&self) -> bool;

    /// The statement this one forwards its operations to. `None` for native statements.
    fn delegate(&self) -> Option<StatementHandle> {
        None
    }
}

/// A statement with SQL text fixed at creation time.
pub trait PreparedStatement: Statement {
    /// Executes the prepared query and returns its result set.
    fn query(&self) -> Result<ResultSetHandle, Error>;

    /// Same as [`Statement::delegate`], but keeps the information that the delegate is a prepared
    /// statement.
    fn prepared_delegate(&self) -> Option<PreparedStatementHandle> {
        None
    }
}

/// A prepared statement calling a stored procedure.
pub trait CallableStatement: PreparedStatement {
    /// Same as [`Statement::delegate`], but keeps the information that the delegate is a callable
    /// statement.
    fn callable_delegate(&self) -> Option<CallableStatementHandle> {
        None
    }
}

/// Rows produced by executing a query.
pub trait ResultSet: Any + Send + Sync {
    /// Advances to the next row. `false` if there are no more rows.
    fn fetch(&self) -> Result<bool, Error>;

    /// The statement which produced this result set. `None` for result sets not created by a
    /// statement, e.g. metadata queries.
    fn statement(&self) -> Result<Option<StatementHandle>, Error>;

    /// Closes the result set.
    fn close(&self) -> Result<(), Error>;

    /// `true` once [`Self::close`] has been called.
    fn is_closed(&self) -> bool;

    /// The result set this one forwards its operations to. `None` for native result sets.
    fn delegate(&self) -> Option<ResultSetHandle> {
        None
    }
}
