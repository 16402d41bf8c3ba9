//! A fake database driver and a fake foreign pool, shared by the integration tests.
#![allow(dead_code)]

use std::{
    any::Any,
    sync::{
        Arc, Weak,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use native_handles::{
    CallableStatement, CallableStatementHandle, Connection, ConnectionHandle, Error,
    PreparedStatement, PreparedStatementHandle, ResultSet, ResultSetHandle, Statement,
    StatementHandle,
};

/// Message of the error the fake driver emits for operations on closed statements.
pub const STATEMENT_CLOSED: &str = "Statement is closed.";

pub fn init() {
    // Set environment to something like:
    // RUST_LOG=native_handles=debug cargo test
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `Some` if `con` is a connection of the fake driver.
pub fn as_native_connection(con: &ConnectionHandle) -> Option<&NativeConnection> {
    let any: &dyn Any = &**con;
    any.downcast_ref()
}

/// `Some` if `stmt` is a statement of the fake driver.
pub fn as_native_statement(stmt: &dyn Statement) -> Option<&NativeStatement> {
    let any: &dyn Any = stmt;
    any.downcast_ref()
}

/// `Some` if `rs` is a result set of the fake driver.
pub fn as_native_result_set(rs: &dyn ResultSet) -> Option<&NativeResultSet> {
    let any: &dyn Any = rs;
    any.downcast_ref()
}

/// Native connection of the fake driver.
pub struct NativeConnection {
    me: Weak<NativeConnection>,
    closed: AtomicBool,
    /// Number of statements created by this connection, which have been closed since.
    closed_statements: Arc<AtomicUsize>,
}

impl NativeConnection {
    pub fn new() -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            me: me.clone(),
            closed: AtomicBool::new(false),
            closed_statements: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// A vendor extension, only reachable after extracting the native connection.
    pub fn server_version(&self) -> &'static str {
        "fake 1.0"
    }

    pub fn num_closed_statements(&self) -> usize {
        self.closed_statements.load(Ordering::SeqCst)
    }

    fn this(&self) -> ConnectionHandle {
        self.me.upgrade().unwrap()
    }
}

impl Connection for NativeConnection {
    fn create_statement(&self) -> Result<StatementHandle, Error> {
        Ok(NativeStatement::new(self.this(), self.closed_statements.clone()))
    }

    fn prepare_statement(&self, sql: &str) -> Result<PreparedStatementHandle, Error> {
        Ok(NativeStatement::prepared(
            self.this(),
            self.closed_statements.clone(),
            sql,
        ))
    }

    fn prepare_call(&self, sql: &str) -> Result<CallableStatementHandle, Error> {
        Ok(NativeStatement::prepared(
            self.this(),
            self.closed_statements.clone(),
            sql,
        ))
    }

    fn close(&self) -> Result<(), Error> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Native statement of the fake driver. Plays the role of plain, prepared and callable statement.
pub struct NativeStatement {
    me: Weak<NativeStatement>,
    connection: ConnectionHandle,
    sql: Option<String>,
    closed: AtomicBool,
    closed_statements: Arc<AtomicUsize>,
}

impl NativeStatement {
    pub fn new(connection: ConnectionHandle, closed_statements: Arc<AtomicUsize>) -> Arc<Self> {
        Self::with_sql(connection, closed_statements, None)
    }

    pub fn prepared(
        connection: ConnectionHandle,
        closed_statements: Arc<AtomicUsize>,
        sql: &str,
    ) -> Arc<Self> {
        Self::with_sql(connection, closed_statements, Some(sql.to_owned()))
    }

    fn with_sql(
        connection: ConnectionHandle,
        closed_statements: Arc<AtomicUsize>,
        sql: Option<String>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            me: me.clone(),
            connection,
            sql,
            closed: AtomicBool::new(false),
            closed_statements,
        })
    }

    /// A vendor extension, only reachable after extracting the native statement.
    pub fn sql(&self) -> Option<&str> {
        self.sql.as_deref()
    }

    fn ensure_open(&self) -> Result<(), Error> {
        if self.is_closed() {
            Err(Error::driver(STATEMENT_CLOSED))
        } else {
            Ok(())
        }
    }

    fn result_set(&self) -> ResultSetHandle {
        let me: StatementHandle = self.me.upgrade().unwrap();
        NativeResultSet::new(Some(me), 2)
    }
}

impl Statement for NativeStatement {
    fn connection(&self) -> Result<ConnectionHandle, Error> {
        self.ensure_open()?;
        Ok(self.connection.clone())
    }

    fn execute_query(&self, _sql: &str) -> Result<ResultSetHandle, Error> {
        self.ensure_open()?;
        Ok(self.result_set())
    }

    fn close(&self) -> Result<(), Error> {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.closed_statements.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl PreparedStatement for NativeStatement {
    fn query(&self) -> Result<ResultSetHandle, Error> {
        self.ensure_open()?;
        Ok(self.result_set())
    }
}

impl CallableStatement for NativeStatement {}

/// Native result set of the fake driver, yielding a fixed number of rows.
pub struct NativeResultSet {
    statement: Option<StatementHandle>,
    remaining_rows: AtomicUsize,
    closed: AtomicBool,
}

impl NativeResultSet {
    pub fn new(statement: Option<StatementHandle>, num_rows: usize) -> Arc<Self> {
        Arc::new(Self {
            statement,
            remaining_rows: AtomicUsize::new(num_rows),
            closed: AtomicBool::new(false),
        })
    }

    /// A vendor extension, only reachable after extracting the native result set.
    pub fn remaining_rows(&self) -> usize {
        self.remaining_rows.load(Ordering::SeqCst)
    }
}

impl ResultSet for NativeResultSet {
    fn fetch(&self) -> Result<bool, Error> {
        let fetched = self
            .remaining_rows
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        Ok(fetched)
    }

    fn statement(&self) -> Result<Option<StatementHandle>, Error> {
        Ok(self.statement.clone())
    }

    fn close(&self) -> Result<(), Error> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Connection wrapper of some other pool. Unknown to [`native_handles::DelegatingExtractor`].
pub struct ForeignConnection {
    inner: ConnectionHandle,
    /// Whether the wrapper admits to wrapping `inner`.
    exposes_delegate: bool,
}

impl ForeignConnection {
    pub fn new(inner: ConnectionHandle) -> Arc<Self> {
        Arc::new(Self {
            inner,
            exposes_delegate: true,
        })
    }

    pub fn opaque(inner: ConnectionHandle) -> Arc<Self> {
        Arc::new(Self {
            inner,
            exposes_delegate: false,
        })
    }
}

impl Connection for ForeignConnection {
    fn create_statement(&self) -> Result<StatementHandle, Error> {
        self.inner.create_statement()
    }

    fn prepare_statement(&self, sql: &str) -> Result<PreparedStatementHandle, Error> {
        self.inner.prepare_statement(sql)
    }

    fn prepare_call(&self, sql: &str) -> Result<CallableStatementHandle, Error> {
        self.inner.prepare_call(sql)
    }

    fn close(&self) -> Result<(), Error> {
        self.inner.close()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn delegate(&self) -> Option<ConnectionHandle> {
        self.exposes_delegate.then(|| self.inner.clone())
    }
}

/// Result set wrapper of some other pool.
pub struct ForeignResultSet {
    inner: ResultSetHandle,
}

impl ForeignResultSet {
    pub fn new(inner: ResultSetHandle) -> Arc<Self> {
        Arc::new(Self { inner })
    }
}

impl ResultSet for ForeignResultSet {
    fn fetch(&self) -> Result<bool, Error> {
        self.inner.fetch()
    }

    fn statement(&self) -> Result<Option<StatementHandle>, Error> {
        self.inner.statement()
    }

    fn close(&self) -> Result<(), Error> {
        self.inner.close()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn delegate(&self) -> Option<ResultSetHandle> {
        Some(self.inner.clone())
    }
}
