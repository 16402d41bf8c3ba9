use std::sync::{Arc, Weak};

use crate::{
    Error,
    handles::{
        ConnectionHandle, PreparedStatement, PreparedStatementHandle, ResourceKind,
        ResultSetHandle, Statement, StatementHandle, innermost,
    },
};

use super::{DelegatingResultSet, OpenState, upgrade};

/// Prepared statement proxy created by [`super::DelegatingConnection::prepare_statement`].
pub struct DelegatingPreparedStatement {
    me: Weak<DelegatingPreparedStatement>,
    connection: ConnectionHandle,
    delegate: PreparedStatementHandle,
    state: OpenState,
}

impl DelegatingPreparedStatement {
    /// Wraps `delegate`. `connection` is reported as the owner of the statement.
    pub fn new(connection: ConnectionHandle, delegate: PreparedStatementHandle) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            me: me.clone(),
            connection,
            delegate,
            state: OpenState::default(),
        })
    }

    /// The native prepared statement at the bottom of the chain of wrappers.
    pub fn innermost_delegate(&self) -> PreparedStatementHandle {
        innermost(
            self.delegate.clone(),
            ResourceKind::PreparedStatement,
            |ps| ps.prepared_delegate(),
        )
    }

    fn wrap(&self, result_set: ResultSetHandle) -> Result<ResultSetHandle, Error> {
        let me = upgrade(&self.me, ResourceKind::PreparedStatement)?;
        Ok(DelegatingResultSet::new(Some(me as StatementHandle), result_set))
    }
}

impl Statement for DelegatingPreparedStatement {
    fn connection(&self) -> Result<ConnectionHandle, Error> {
        self.state.ensure_open(ResourceKind::PreparedStatement)?;
        Ok(self.connection.clone())
    }

    fn execute_query(&self, sql: &str) -> Result<ResultSetHandle, Error> {
        self.state.ensure_open(ResourceKind::PreparedStatement)?;
        let result_set = self.delegate.execute_query(sql)?;
        self.wrap(result_set)
    }

    fn close(&self) -> Result<(), Error> {
        self.state.close(|| self.delegate.close())
    }

    fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    fn delegate(&self) -> Option<StatementHandle> {
        Some(self.delegate.clone() as StatementHandle)
    }
}

impl PreparedStatement for DelegatingPreparedStatement {
    fn query(&self) -> Result<ResultSetHandle, Error> {
        self.state.ensure_open(ResourceKind::PreparedStatement)?;
        let result_set = self.delegate.query()?;
        self.wrap(result_set)
    }

    fn prepared_delegate(&self) -> Option<PreparedStatementHandle> {
        Some(self.delegate.clone())
    }
}
