//! Point-free helpers for iterator pipelines.

use itertools::Itertools;

use crate::{Either, Left, Maybe, Result, Right};

pub fn from_left<T>(x: Left<T>) -> T {
    x.0
}

pub fn from_right<T>(x: Right<T>) -> T {
    x.0
}

pub fn map_left<A, B, C>(f: impl Fn(A) -> B) -> impl Fn(Either<A, C>) -> Either<B, C> {
    move |e| e.map_left(&f)
}

pub fn map_right<A, B, C>(f: impl Fn(A) -> B) -> impl Fn(Either<C, A>) -> Either<C, B> {
    move |e| e.map_right(&f)
}

pub fn on_success<A, B>(f: impl Fn(A) -> Result<B>) -> impl Fn(Result<A>) -> Result<B> {
    move |r| r.on_success(&f)
}

pub fn map_success<A, B>(f: impl Fn(A) -> B) -> impl Fn(Result<A>) -> Result<B> {
    move |r| r.map_success(&f)
}

pub fn bind<A, B>(f: impl Fn(A) -> Maybe<B>) -> impl Fn(Maybe<A>) -> Maybe<B> {
    move |m| m.bind(&f)
}

/// Splits eithers into their left and right payloads, keeping order.
pub fn partition<L, R>(eithers: impl IntoIterator<Item = Either<L, R>>) -> (Vec<L>, Vec<R>) {
    eithers.into_iter().partition_map(|e| match e {
        Either::Left(l) => itertools::Either::Left(l),
        Either::Right(r) => itertools::Either::Right(r),
    })
}
