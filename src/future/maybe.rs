use std::future::Future;

use super::chain;
use crate::{Error, Maybe, Result};

impl<T> Maybe<T> {
    /// Like [`bind`](Self::bind), with an asynchronous function.
    pub async fn bind_async<U, F>(self, f: impl FnOnce(T) -> F) -> Maybe<U>
    where
        F: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Some(value) => f(value).await,
            Self::None => Maybe::None,
        }
    }
}

/// [`Maybe`] combinators for futures that resolve to a `Maybe`.
pub trait MaybeFuture<T>: Future<Output = Maybe<T>> + Sized {
    fn unwrap_or(self, default: T) -> impl Future<Output = T> {
        chain(self, move |maybe: Maybe<T>| maybe.unwrap_or(default))
    }

    fn unwrap_or_default(self) -> impl Future<Output = T>
    where
        T: Default,
    {
        chain(self, Maybe::unwrap_or_default)
    }

    fn to_result(self, error: impl Into<Error>) -> impl Future<Output = Result<T>> {
        chain(self, move |maybe: Maybe<T>| maybe.to_result(error))
    }

    fn tap(self, action: impl FnOnce(&T)) -> impl Future<Output = Maybe<T>> {
        chain(self, move |maybe: Maybe<T>| maybe.tap(action))
    }

    fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> impl Future<Output = Maybe<U>> {
        chain(self, move |maybe: Maybe<T>| maybe.bind(f))
    }

    fn bind_async<U, F>(self, f: impl FnOnce(T) -> F) -> impl Future<Output = Maybe<U>>
    where
        F: Future<Output = Maybe<U>>,
    {
        async move { self.await.bind_async(f).await }
    }
}

impl<T, Fut> MaybeFuture<T> for Fut where Fut: Future<Output = Maybe<T>> {}
