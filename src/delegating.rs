//! Proxies of the delegating pool family.
//!
//! Pools of this family hand out a `Delegating*` proxy in place of each native resource. Every
//! proxy forwards to its delegate, which may be the native object or yet another proxy, e.g. if a
//! statement cache is layered on top of the pool. Each proxy knows its innermost delegate, so
//! [`crate::DelegatingExtractor`] does not need to walk the chain itself.
//!
//! Closing a proxy invalidates it. Asking a closed proxy e.g. for its connection fails with
//! [`crate::Error::ResourceClosed`]. Its chain of delegates can still be inspected though.

mod callable_statement;
mod connection;
mod prepared_statement;
mod result_set;
mod statement;

pub use self::{
    callable_statement::DelegatingCallableStatement, connection::DelegatingConnection,
    prepared_statement::DelegatingPreparedStatement, result_set::DelegatingResultSet,
    statement::DelegatingStatement,
};

use std::sync::{
    Arc, Mutex, PoisonError, Weak,
    atomic::{AtomicBool, Ordering},
};

use crate::{Error, handles::ResourceKind};

/// Open or closed state of a proxy.
#[derive(Debug, Default)]
struct OpenState {
    closed: AtomicBool,
    /// Held while the delegate is closed, so concurrent calls close it only once.
    closing: Mutex<()>,
}

impl OpenState {
    fn ensure_open(&self, kind: ResourceKind) -> Result<(), Error> {
        if self.is_closed() {
            Err(Error::ResourceClosed { kind })
        } else {
            Ok(())
        }
    }

    /// Closes the delegate using `close_delegate` and marks the proxy as closed, unless it has
    /// been closed before. Should `close_delegate` fail, the proxy stays open and closing it can be
    /// retried.
    fn close(&self, close_delegate: impl FnOnce() -> Result<(), Error>) -> Result<(), Error> {
        let _closing = self.closing.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_closed() {
            return Ok(());
        }
        close_delegate()?;
        self.closed.store(true, Ordering::Release);
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// Proxies hand out `Arc`s to themselves, e.g. a statement as the owner of the result sets it
/// creates. They are only ever constructed behind an `Arc`, so upgrading succeeds as long as
/// `&self` is alive.
fn upgrade<T>(me: &Weak<T>, kind: ResourceKind) -> Result<Arc<T>, Error> {
    me.upgrade().ok_or(Error::ResourceClosed { kind })
}
