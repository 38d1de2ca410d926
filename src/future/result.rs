use std::future::Future;

use super::chain;
use crate::{Error, Result};

impl<T> Result<T> {
    pub async fn on_success_async<U, F>(self, f: impl FnOnce(T) -> F) -> Result<U>
    where
        F: Future<Output = Result<U>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(error) => {
                log::trace!("skipping success step after failure: {error}");
                Result::Failure(error)
            }
        }
    }

    pub async fn map_success_async<U, F>(self, f: impl FnOnce(T) -> F) -> Result<U>
    where
        F: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Result::Success(f(value).await),
            Self::Failure(error) => {
                log::trace!("skipping success step after failure: {error}");
                Result::Failure(error)
            }
        }
    }

    pub async fn on_failure_async<F>(self, f: impl FnOnce(Error) -> F) -> Self
    where
        F: Future<Output = Self>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => {
                log::trace!("running failure step for: {error}");
                f(error).await
            }
        }
    }

    pub async fn map_failure_async<E, F>(self, f: impl FnOnce(Error) -> F) -> Self
    where
        E: Into<Error>,
        F: Future<Output = E>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(f(error).await.into()),
        }
    }

    pub async fn on_both_async<U, F>(self, f: impl FnOnce(Self) -> F) -> U
    where
        F: Future<Output = U>,
    {
        f(self).await
    }
}

/// [`Result`] combinators for futures that resolve to a `Result`.
///
/// Each step awaits the whole chain before it, so a failure raised
/// anywhere upstream reaches the step as its input, not as a panic.
pub trait ResultFuture<T>: Future<Output = Result<T>> + Sized {
    fn on_success<U>(self, f: impl FnOnce(T) -> Result<U>) -> impl Future<Output = Result<U>> {
        chain(self, move |result: Result<T>| result.on_success(f))
    }

    fn map_success<U>(self, f: impl FnOnce(T) -> U) -> impl Future<Output = Result<U>> {
        chain(self, move |result: Result<T>| result.map_success(f))
    }

    fn tap_success(self, action: impl FnOnce(&T)) -> impl Future<Output = Result<T>> {
        chain(self, move |result: Result<T>| result.tap_success(action))
    }

    fn on_failure(self, f: impl FnOnce(Error) -> Result<T>) -> impl Future<Output = Result<T>> {
        chain(self, move |result: Result<T>| result.on_failure(f))
    }

    fn map_failure<E: Into<Error>>(
        self,
        f: impl FnOnce(Error) -> E,
    ) -> impl Future<Output = Result<T>> {
        chain(self, move |result: Result<T>| result.map_failure(f))
    }

    fn tap_failure(self, action: impl FnOnce(&Error)) -> impl Future<Output = Result<T>> {
        chain(self, move |result: Result<T>| result.tap_failure(action))
    }

    fn on_both<U>(self, f: impl FnOnce(Result<T>) -> U) -> impl Future<Output = U> {
        chain(self, f)
    }

    fn ensure(
        self,
        check: impl FnOnce(&T) -> bool,
        error: impl Into<Error>,
    ) -> impl Future<Output = Result<T>> {
        chain(self, move |result: Result<T>| result.ensure(check, error))
    }

    fn on_failure_raise<E>(
        self,
        f: impl FnOnce(Error) -> E,
    ) -> impl Future<Output = core::result::Result<Result<T>, E>> {
        chain(self, move |result: Result<T>| result.on_failure_raise(f))
    }

    fn on_success_async<U, F>(self, f: impl FnOnce(T) -> F) -> impl Future<Output = Result<U>>
    where
        F: Future<Output = Result<U>>,
    {
        async move { self.await.on_success_async(f).await }
    }

    fn map_success_async<U, F>(self, f: impl FnOnce(T) -> F) -> impl Future<Output = Result<U>>
    where
        F: Future<Output = U>,
    {
        async move { self.await.map_success_async(f).await }
    }

    fn on_failure_async<F>(self, f: impl FnOnce(Error) -> F) -> impl Future<Output = Result<T>>
    where
        F: Future<Output = Result<T>>,
    {
        async move { self.await.on_failure_async(f).await }
    }

    fn map_failure_async<E, F>(self, f: impl FnOnce(Error) -> F) -> impl Future<Output = Result<T>>
    where
        E: Into<Error>,
        F: Future<Output = E>,
    {
        async move { self.await.map_failure_async(f).await }
    }

    fn on_both_async<U, F>(self, f: impl FnOnce(Result<T>) -> F) -> impl Future<Output = U>
    where
        F: Future<Output = U>,
    {
        async move { f(self.await).await }
    }
}

impl<T, Fut> ResultFuture<T> for Fut where Fut: Future<Output = Result<T>> {}

/// Wraps the output of any future in [`Result::Success`].
pub trait ToSuccessAsync: Future + Sized {
    fn to_success_async(self) -> impl Future<Output = Result<Self::Output>> {
        chain(self, Result::Success)
    }
}

impl<Fut: Future> ToSuccessAsync for Fut {}

/// Wraps the output of a future that resolves to an error message in
/// [`Result::Failure`].
pub trait ToFailAsync: Future + Sized
where
    Self::Output: Into<Error>,
{
    fn to_fail_async<T>(self) -> impl Future<Output = Result<T>> {
        chain(self, |error: Self::Output| Result::<T>::Failure(error.into()))
    }
}

impl<Fut> ToFailAsync for Fut
where
    Fut: Future,
    Fut::Output: Into<Error>,
{
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::{executor::block_on, future::ready};
    use pretty_assertions::assert_eq;

    use super::*;

    fn success(value: i32) -> impl Future<Output = Result<i32>> {
        ready(Result::success(value))
    }

    fn failure(message: &str) -> impl Future<Output = Result<i32>> {
        ready(Result::fail(message))
    }

    #[test]
    fn failure_skips_every_success_step() {
        let calls = Cell::new(0);

        let result = block_on(
            failure("e")
                .on_success(|v| {
                    calls.set(calls.get() + 1);
                    Result::success(v + 1)
                })
                .map_success(|v| {
                    calls.set(calls.get() + 1);
                    v * 2
                })
                .on_success_async(|v| {
                    calls.set(calls.get() + 1);
                    async move { Result::success(v) }
                })
                .map_success_async(|v| {
                    calls.set(calls.get() + 1);
                    async move { v }
                })
                .tap_success(|_| calls.set(calls.get() + 1)),
        );

        assert_eq!(calls.get(), 0);
        assert_eq!(result, Result::fail("e"));
    }

    #[test]
    fn async_recovery_continues_the_chain() {
        let result = block_on(
            ready(Result::<String>::fail("error"))
                .on_failure_async(|_| async { Result::success("ok".to_owned()) })
                .map_success(|v| v + "!"),
        );

        assert_eq!(result, Result::success("ok!".to_owned()));
    }

    #[test]
    fn failure_steps_see_the_upstream_error() {
        let seen = RefCell::new(Vec::new());

        let result = block_on(
            success(2)
                .ensure(|v| *v > 5, "too small")
                .tap_failure(|e| seen.borrow_mut().push(e.to_string()))
                .map_failure(|e| format!("{e}, twice"))
                .map_failure_async(|e| async move { format!("{e}, thrice") }),
        );

        assert_eq!(*seen.borrow(), ["too small"]);
        assert_eq!(result.error().message(), "too small, twice, thrice");
    }

    #[test]
    fn success_passes_failure_steps() {
        let result = block_on(
            success(1)
                .on_failure(|_| Result::success(100))
                .on_failure_async(|_| async { Result::success(200) })
                .tap_failure(|_| panic!("should not run")),
        );

        assert_eq!(result, Result::success(1));
    }

    #[test]
    fn on_both_always_runs() {
        let state = block_on(failure("x").on_both(|r| r.is_success()));
        assert!(!state);

        let described = block_on(success(3).on_both_async(|r| async move { r.to_string() }));
        assert_eq!(described, "3");
    }

    #[test]
    fn on_failure_raise_after_await() {
        let raised = block_on(failure("bad").on_failure_raise(|e| e.to_string()));
        assert_eq!(raised, Err("bad".to_owned()));

        let passed = block_on(success(4).on_failure_raise(|e| e.to_string()));
        assert_eq!(passed, Ok(Result::success(4)));
    }

    #[test]
    fn lifting_plain_futures() {
        assert_eq!(block_on(ready(5).to_success_async()), Result::success(5));
        assert_eq!(
            block_on(ready("lost").to_fail_async::<i32>()),
            Result::fail("lost")
        );
    }

    #[test]
    fn sync_source_with_async_step() {
        let result = block_on(
            Result::success(2).on_success_async(|v| async move { Result::success(v * 10) }),
        );
        assert_eq!(result, Result::success(20));
    }

    #[test]
    fn steps_run_in_order() {
        let order = RefCell::new(Vec::new());

        let source = async {
            order.borrow_mut().push("source");
            Result::success(1)
        };

        let result = block_on(
            source
                .tap_success(|_| order.borrow_mut().push("first"))
                .map_success_async(|v| {
                    order.borrow_mut().push("second");
                    async move { v + 1 }
                })
                .tap_success(|_| order.borrow_mut().push("third")),
        );

        assert_eq!(result, Result::success(2));
        assert_eq!(*order.borrow(), ["source", "first", "second", "third"]);
    }
}
