mod delegate_walk;
mod delegating;
mod pass_through;

pub use self::{
    delegate_walk::DelegateWalkExtractor, delegating::DelegatingExtractor,
    pass_through::PassThroughExtractor,
};

use crate::{
    Error,
    handles::{
        CallableStatementHandle, ConnectionHandle, PreparedStatementHandle, ResultSetHandle,
        Statement, StatementHandle,
    },
};

/// Retrieves the native driver objects hidden behind the proxies of a connection pool.
///
/// Each implementation knows the proxies of one pool implementation. Handles it does not recognize,
/// be it because they stem from another pool, or because they are native already, are returned
/// unchanged. Therefore extracting is idempotent and never fails. The only fallible operation is
/// [`Self::extract_connection_from_statement`], which has to ask the statement for its connection
/// first.
///
/// Implementations are stateless. Configure one instance and share it, e.g. as an
/// `Arc<dyn NativeExtractor>`, between all threads.
pub trait NativeExtractor: Send + Sync {
    /// `true` if native statements can only be obtained by creating them on the native connection,
    /// rather than by extracting them from the statements handed out by the pool. Some pools only
    /// keep track of the innermost delegate per connection. Consumers are expected to query this
    /// once, as part of their configuration.
    fn needs_native_connection_for_statements(&self) -> bool;

    /// The native connection behind `con`, or `con` itself if it is not recognized.
    fn extract_connection(&self, con: ConnectionHandle) -> ConnectionHandle;

    /// The native connection owning `stmt`.
    ///
    /// # Errors
    ///
    /// Any error from asking `stmt` for its connection, e.g. because it is already closed. The
    /// error is passed on as it is.
    fn extract_connection_from_statement(
        &self,
        stmt: &dyn Statement,
    ) -> Result<ConnectionHandle, Error> {
        let con = stmt.connection()?;
        Ok(self.extract_connection(con))
    }

    /// The native statement behind `stmt`, or `stmt` itself if it is not recognized.
    fn extract_statement(&self, stmt: StatementHandle) -> StatementHandle;

    /// The native prepared statement behind `ps`, or `ps` itself if it is not recognized.
    fn extract_prepared_statement(&self, ps: PreparedStatementHandle) -> PreparedStatementHandle;

    /// The native callable statement behind `cs`, or `cs` itself if it is not recognized.
    fn extract_callable_statement(&self, cs: CallableStatementHandle) -> CallableStatementHandle;

    /// The native result set behind `rs`, or `rs` itself if it is not recognized.
    fn extract_result_set(&self, rs: ResultSetHandle) -> ResultSetHandle;
}
