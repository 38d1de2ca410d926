//! Chaining across suspension points.
//!
//! Every combinator on [`Either`](crate::Either), [`Maybe`](crate::Maybe)
//! and [`Result`](crate::Result) has a counterpart here that takes a future
//! of the wrapper instead of the wrapper itself. They are all thin uses of
//! [`chain`]: await the predecessor completely, then hand its output to the
//! synchronous combinator. Steps that are themselves asynchronous (the
//! `*_async` methods) only build their future once the predecessor has
//! resolved, and only for the active side or state. Nothing runs
//! concurrently and nothing is spawned.

mod either;
mod maybe;
mod result;

use std::future::Future;

use futures::{future::Map, FutureExt};

pub use either::EitherFuture;
pub use maybe::MaybeFuture;
pub use result::{ResultFuture, ToFailAsync, ToSuccessAsync};

/// Awaits `future`, then applies the synchronous `step` to its output.
pub fn chain<Fut, F, T>(future: Fut, step: F) -> Map<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> T,
{
    FutureExt::map(future, step)
}
