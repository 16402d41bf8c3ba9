use std::{ptr, sync::Arc};

use log::warn;

use super::ResourceKind;

/// Maximum number of wrappers [`innermost`] is willing to look through. Real world chains are only
/// a handful of layers deep. Anything beyond this is most likely a cycle.
pub const MAX_DELEGATE_DEPTH: usize = 64;

/// Follows `step` from `handle` down the chain of wrappers, until it reaches a handle without a
/// delegate.
///
/// # Parameters
///
/// * `handle`: Start of the chain. Returned as is, if `step` yields `None` for it.
/// * `kind`: Kind of resource in the chain. Only used for logging.
/// * `step`: Single step accessor returning the direct delegate of a handle, if any.
///
/// # Return
///
/// The innermost handle of the chain. Should the chain be longer than [`MAX_DELEGATE_DEPTH`] the
/// walk is aborted with a warning, and the deepest handle reached so far is returned.
pub fn innermost<H>(
    handle: Arc<H>,
    kind: ResourceKind,
    step: impl Fn(&H) -> Option<Arc<H>>,
) -> Arc<H>
where
    H: ?Sized,
{
    let mut current = handle;
    let mut depth = 0;
    while let Some(next) = step(&*current) {
        if depth == MAX_DELEGATE_DEPTH {
            warn!(
                "Stopped unwrapping {kind} after {MAX_DELEGATE_DEPTH} delegates. The chain of \
                wrappers is either cyclic or unreasonably deep."
            );
            break;
        }
        current = next;
        depth += 1;
    }
    current
}

/// `true` if both handles refer to the same object. Types and vtables of the handles are ignored,
/// so a prepared statement handle and a plain statement handle to the same object are the same.
pub fn same_handle<A, B>(a: &Arc<A>, b: &Arc<B>) -> bool
where
    A: ?Sized,
    B: ?Sized,
{
    ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
