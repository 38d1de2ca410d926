use std::future::Future;

use super::chain;
use crate::Either;

impl<L, R> Either<L, R> {
    /// Like [`to_value`](Self::to_value), with asynchronous functions.
    pub async fn to_value_async<T, FL, FR>(
        self,
        on_left: impl FnOnce(L) -> FL,
        on_right: impl FnOnce(R) -> FR,
    ) -> T
    where
        FL: Future<Output = T>,
        FR: Future<Output = T>,
    {
        match self {
            Self::Left(l) => on_left(l).await,
            Self::Right(r) => on_right(r).await,
        }
    }

    pub async fn map_left_async<L2, F>(self, f: impl FnOnce(L) -> F) -> Either<L2, R>
    where
        F: Future<Output = L2>,
    {
        match self {
            Self::Left(l) => Either::Left(f(l).await),
            Self::Right(r) => Either::Right(r),
        }
    }

    pub async fn map_right_async<R2, F>(self, f: impl FnOnce(R) -> F) -> Either<L, R2>
    where
        F: Future<Output = R2>,
    {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r).await),
        }
    }
}

/// [`Either`] combinators for futures that resolve to an `Either`.
pub trait EitherFuture<L, R>: Future<Output = Either<L, R>> + Sized {
    /// # Panics
    ///
    /// The returned future panics if the either is right-sided.
    fn to_left(self) -> impl Future<Output = L> {
        chain(self, Either::to_left)
    }

    /// # Panics
    ///
    /// The returned future panics if the either is left-sided.
    fn to_right(self) -> impl Future<Output = R> {
        chain(self, Either::to_right)
    }

    fn to_left_or(self, default: L) -> impl Future<Output = L> {
        chain(self, move |either: Either<L, R>| either.to_left_or(default))
    }

    fn to_right_or(self, default: R) -> impl Future<Output = R> {
        chain(self, move |either: Either<L, R>| either.to_right_or(default))
    }

    fn to_value<T>(
        self,
        on_left: impl FnOnce(L) -> T,
        on_right: impl FnOnce(R) -> T,
    ) -> impl Future<Output = T> {
        chain(self, move |either: Either<L, R>| {
            either.to_value(on_left, on_right)
        })
    }

    fn left_or_right(
        self,
        on_left: impl FnOnce(&L),
        on_right: impl FnOnce(&R),
    ) -> impl Future<Output = Either<L, R>> {
        chain(self, move |either: Either<L, R>| {
            either.left_or_right(on_left, on_right)
        })
    }

    fn map_both<L2, R2>(
        self,
        on_left: impl FnOnce(L) -> L2,
        on_right: impl FnOnce(R) -> R2,
    ) -> impl Future<Output = Either<L2, R2>> {
        chain(self, move |either: Either<L, R>| {
            either.map_both(on_left, on_right)
        })
    }

    fn map_left<L2>(self, f: impl FnOnce(L) -> L2) -> impl Future<Output = Either<L2, R>> {
        chain(self, move |either: Either<L, R>| either.map_left(f))
    }

    fn map_right<R2>(self, f: impl FnOnce(R) -> R2) -> impl Future<Output = Either<L, R2>> {
        chain(self, move |either: Either<L, R>| either.map_right(f))
    }

    fn tap_left(self, action: impl FnOnce(&L)) -> impl Future<Output = Either<L, R>> {
        chain(self, move |either: Either<L, R>| either.tap_left(action))
    }

    fn tap_right(self, action: impl FnOnce(&R)) -> impl Future<Output = Either<L, R>> {
        chain(self, move |either: Either<L, R>| either.tap_right(action))
    }

    fn to_value_async<T, FL, FR>(
        self,
        on_left: impl FnOnce(L) -> FL,
        on_right: impl FnOnce(R) -> FR,
    ) -> impl Future<Output = T>
    where
        FL: Future<Output = T>,
        FR: Future<Output = T>,
    {
        async move { self.await.to_value_async(on_left, on_right).await }
    }

    fn map_left_async<L2, F>(self, f: impl FnOnce(L) -> F) -> impl Future<Output = Either<L2, R>>
    where
        F: Future<Output = L2>,
    {
        async move { self.await.map_left_async(f).await }
    }

    fn map_right_async<R2, F>(self, f: impl FnOnce(R) -> F) -> impl Future<Output = Either<L, R2>>
    where
        F: Future<Output = R2>,
    {
        async move { self.await.map_right_async(f).await }
    }
}

impl<L, R, Fut> EitherFuture<L, R> for Fut where Fut: Future<Output = Either<L, R>> {}
