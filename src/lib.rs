//! `Either`, `Maybe` and `Result` wrappers with chainable combinators,
//! synchronous and asynchronous.

pub mod either;
pub mod error;
#[cfg(feature = "async")]
pub mod future;
pub mod maybe;
pub mod result;
pub mod util;

pub use either::{Either, IntoEither, Left, Right, Side};
pub use error::{Error, Fault};
#[cfg(feature = "async")]
pub use future::{EitherFuture, MaybeFuture, ResultFuture, ToFailAsync, ToSuccessAsync};
pub use maybe::{Maybe, ToMaybe};
pub use result::{Result, ToFail, ToSuccess, UnitDisplay};
