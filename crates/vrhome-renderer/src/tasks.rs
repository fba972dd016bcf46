//! Per-frame executor for launcher futures.
//!
//! Texture loads, icon reveals and background swaps are plain futures that
//! mutate shared scene state. They are driven here, once per frame, on the
//! frame thread; nothing is ever polled from another thread.

use futures_util::future::LocalBoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};
use futures_util::task::noop_waker_ref;
use futures_util::FutureExt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::trace;

#[derive(Default)]
pub struct FrameTasks {
    tasks: FuturesUnordered<LocalBoxFuture<'static, ()>>,
}

impl FrameTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        self.tasks.push(future.boxed_local());
    }

    /// Advance every ready task. Returns how many finished this frame.
    pub fn poll(&mut self) -> usize {
        let mut cx = Context::from_waker(noop_waker_ref());
        let mut finished = 0;
        while let Poll::Ready(Some(())) = self.tasks.poll_next_unpin(&mut cx) {
            finished += 1;
        }
        if finished > 0 {
            trace!("{finished} frame tasks finished, {} pending", self.tasks.len());
        }
        finished
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Resolves on its second poll, deferring the rest of a task to a later frame.
pub fn idle() -> Idle {
    Idle { yielded: false }
}

pub struct Idle {
    yielded: bool,
}

impl Future for Idle {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
