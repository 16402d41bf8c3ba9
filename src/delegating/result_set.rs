use std::sync::Arc;

use crate::{
    Error,
    handles::{ResourceKind, ResultSet, ResultSetHandle, StatementHandle, innermost},
};

use super::OpenState;

/// Result set proxy created by executing a query on any of the statement proxies.
pub struct DelegatingResultSet {
    statement: Option<StatementHandle>,
    delegate: ResultSetHandle,
    state: OpenState,
}

impl DelegatingResultSet {
    /// Wraps `delegate`. `statement` is reported as the statement which produced the result set.
    pub fn new(statement: Option<StatementHandle>, delegate: ResultSetHandle) -> Arc<Self> {
        Arc::new(Self {
            statement,
            delegate,
            state: OpenState::default(),
        })
    }

    /// The native result set at the bottom of the chain of wrappers.
    pub fn innermost_delegate(&self) -> ResultSetHandle {
        innermost(self.delegate.clone(), ResourceKind::ResultSet, |rs| {
            rs.delegate()
        })
    }
}

impl ResultSet for DelegatingResultSet {
    fn fetch(&self) -> Result<bool, Error> {
        self.state.ensure_open(ResourceKind::ResultSet)?;
        self.delegate.fetch()
    }

    fn statement(&self) -> Result<Option<StatementHandle>, Error> {
        self.state.ensure_open(ResourceKind::ResultSet)?;
        Ok(self.statement.clone())
    }

    fn close(&self) -> Result<(), Error> {
        self.state.close(|| self.delegate.close())
    }

    fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    fn delegate(&self) -> Option<ResultSetHandle> {
        Some(self.delegate.clone())
    }
}
