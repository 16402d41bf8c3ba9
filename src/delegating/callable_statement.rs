use std::sync::{Arc, Weak};

use crate::{
    Error,
    handles::{
        CallableStatement, CallableStatementHandle, ConnectionHandle, PreparedStatement,
        PreparedStatementHandle, ResourceKind, ResultSetHandle, Statement, StatementHandle,
        innermost,
    },
};

use super::{DelegatingResultSet, OpenState, upgrade};

/// Callable statement proxy created by [`super::DelegatingConnection::prepare_call`].
pub struct DelegatingCallableStatement {
    me: Weak<DelegatingCallableStatement>,
    connection: ConnectionHandle,
    delegate: CallableStatementHandle,
    state: OpenState,
}

impl DelegatingCallableStatement {
    /// Wraps `delegate`. `connection` is reported as the owner of the statement.
    pub fn new(connection: ConnectionHandle, delegate: CallableStatementHandle) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            me: me.clone(),
            connection,
            delegate,
            state: OpenState::default(),
        })
    }

    /// The native callable statement at the bottom of the chain of wrappers.
    pub fn innermost_delegate(&self) -> CallableStatementHandle {
        innermost(
            self.delegate.clone(),
            ResourceKind::CallableStatement,
            |cs| cs.callable_delegate(),
        )
    }

    fn wrap(&self, result_set: ResultSetHandle) -> Result<ResultSetHandle, Error> {
        let me = upgrade(&self.me, ResourceKind::CallableStatement)?;
        Ok(DelegatingResultSet::new(Some(me as StatementHandle), result_set))
    }
}

impl Statement for DelegatingCallableStatement {
    fn connection(&self) -> Result<ConnectionHandle, Error> {
        self.state.ensure_open(ResourceKind::CallableStatement)?;
        Ok(self.connection.clone())
    }

    fn execute_query(&self, sql: &str) -> Result<ResultSetHandle, Error> {
        self.state.ensure_open(ResourceKind::CallableStatement)?;
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

impl PreparedStatement for DelegatingCallableStatement {
    fn query(&self) -> Result<ResultSetHandle, Error> {
        self.state.ensure_open(ResourceKind::CallableStatement)?;
        let result_set = self.delegate.query()?;
        self.wrap(result_set)
    }

    fn prepared_delegate(&self) -> Option<PreparedStatementHandle> {
        Some(self.delegate.clone() as PreparedStatementHandle)
    }
}

impl CallableStatement for DelegatingCallableStatement {
    fn callable_delegate(&self) -> Option<CallableStatementHandle> {
        Some(self.delegate.clone())
    }
}
