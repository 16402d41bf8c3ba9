use std::sync::{Arc, Weak};

use crate::{
    Error,
    handles::{
        ConnectionHandle, ResourceKind, ResultSetHandle, Statement, StatementHandle, innermost,
    },
};

use super::{DelegatingResultSet, OpenState, upgrade};

/// Statement proxy created by [`super::DelegatingConnection::create_statement`].
pub struct DelegatingStatement {
    me: Weak<DelegatingStatement>,
    /// Owning connection as handed out by the pool, i.e. usually a proxy itself.
    connection: ConnectionHandle,
    delegate: StatementHandle,
    state: OpenState,
}

impl DelegatingStatement {
    /// Wraps `delegate`. `connection` is reported as the owner of the statement.
    pub fn new(connection: ConnectionHandle, delegate: StatementHandle) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            me: me.clone(),
            connection,
            delegate,
            state: OpenState::default(),
        })
    }

    /// The native statement at the bottom of the chain of wrappers.
    pub fn innermost_delegate(&self) -> StatementHandle {
        innermost(self.delegate.clone(), ResourceKind::Statement, |stmt| {
            stmt.delegate()
        })
    }
}

impl Statement for DelegatingStatement {
    fn connection(&self) -> Result<ConnectionHandle, Error> {
        self.state.ensure_open(ResourceKind::Statement)?;
        Ok(self.connection.clone())
    }

    fn execute_query(&self, sql: &str) -> Result<ResultSetHandle, Error> {
        self.state.ensure_open(ResourceKind::Statement)?;
        let result_set = self.delegate.execute_query(sql)?;
        let me = upgrade(&self.me, ResourceKind::Statement)?;
        Ok(DelegatingResultSet::new(Some(me as StatementHandle), result_set))
    }

    fn close(&self) -> Result<(), Error> {
        self.state.close(|| self.delegate.close())
    }

    fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    fn delegate(&self) -> Option<StatementHandle> {
        Some(self.delegate.clone())
    }
}
