use futures::future::{AbortHandle, Abortable};
use std::{cell::RefCell, future::Future, rc::Rc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("operation cancelled")]
pub struct Cancelled;

#[derive(Default)]
struct Inner {
    cancelled: bool,
    handles: Vec<AbortHandle>,
}

/// Shared switch that aborts every future run through it.
///
/// Once cancelled it stays cancelled; later calls to [`CancellationToken::run`]
/// resolve to [`Cancelled`] without polling the future.
#[derive(Clone, Default)]
pub struct CancellationToken {
    inner: Rc<RefCell<Inner>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.borrow().cancelled
    }

    pub fn cancel(&self) {
        let handles = {
            let mut inner = self.inner.borrow_mut();
            inner.cancelled = true;
            std::mem::take(&mut inner.handles)
        };
        for handle in handles {
            handle.abort();
        }
    }

    pub async fn run<F>(&self, future: F) -> Result<F::Output, Cancelled>
    where
        F: Future,
    {
        let future = {
            let mut inner = self.inner.borrow_mut();
            if inner.cancelled {
                return Err(Cancelled);
            }
            let (handle, registration) = AbortHandle::new_pair();
            inner.handles.retain(|h| !h.is_aborted());
            inner.handles.push(handle);
            Abortable::new(future, registration)
        };
        future.await.map_err(|_| Cancelled)
    }
}
