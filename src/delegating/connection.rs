use std::sync::{Arc, Weak};

use crate::{
    Error,
    handles::{
        CallableStatementHandle, Connection, ConnectionHandle, PreparedStatementHandle,
        ResourceKind, StatementHandle, innermost,
    },
};

use super::{
    DelegatingCallableStatement, DelegatingPreparedStatement, DelegatingStatement, OpenState,
    upgrade,
};

/// Connection proxy handed out by the pool in place of the driver connection. Every statement
/// created through it is wrapped in the matching statement proxy, reporting this proxy as its
/// connection.
pub struct DelegatingConnection {
    me: Weak<DelegatingConnection>,
    delegate: ConnectionHandle,
    state: OpenState,
}

impl DelegatingConnection {
    /// Wraps `delegate`, which may be a native connection or another proxy.
    pub fn new(delegate: ConnectionHandle) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            me: me.clone(),
            delegate,
            state: OpenState::default(),
        })
    }

    /// The native connection at the bottom of the chain of wrappers. Layers of other pools are
    /// looked through, as long as they expose their delegate.
    pub fn innermost_delegate(&self) -> ConnectionHandle {
        innermost(self.delegate.clone(), ResourceKind::Connection, |con| {
            con.delegate()
        })
    }

    fn this(&self) -> Result<ConnectionHandle, Error> {
        upgrade(&self.me, ResourceKind::Connection).map(|me| me as ConnectionHandle)
    }
}

impl Connection for DelegatingConnection {
    fn create_statement(&self) -> Result<StatementHandle, Error> {
        self.state.ensure_open(ResourceKind::Connection)?;
        let stmt = self.delegate.create_statement()?;
        Ok(DelegatingStatement::new(self.this()?, stmt))
    }

    fn prepare_statement(&self, sql: &str) -> Result<PreparedStatementHandle, Error> {
        self.state.ensure_open(ResourceKind::Connection)?;
        let ps = self.delegate.prepare_statement(sql)?;
        Ok(DelegatingPreparedStatement::new(self.this()?, ps))
    }

    fn prepare_call(&self, sql: &str) -> Result<CallableStatementHandle, Error> {
        self.state.ensure_open(ResourceKind::Connection)?;
        let cs = self.delegate.prepare_call(sql)?;
        Ok(DelegatingCallableStatement::new(self.this()?, cs))
    }

    fn close(&self) -> Result<(), Error> {
        self.state.close(|| self.delegate.close())
    }

    fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    fn delegate(&self) -> Option<ConnectionHandle> {
        Some(self.delegate.clone())
    }
}
