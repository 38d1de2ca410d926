use core::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Fault;

/// A value of exactly one of two types.
///
/// Side-aware combinators only ever run the function for the active side;
/// the other side's payload passes through untouched.
#[derive(derive_more::IsVariant, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

/// A bare value tagged as belonging to the left side.
///
/// Converting with `From` or comparing with `==` through the marker stays
/// unambiguous even when both sides share a type.
#[repr(transparent)]
#[derive(derive_more::Constructor, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Left<T>(pub T);

/// A bare value tagged as belonging to the right side.
#[repr(transparent)]
#[derive(derive_more::Constructor, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Right<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

impl<L, R> Either<L, R> {
    pub const fn side(&self) -> Side {
        match self {
            Self::Left(_) => Side::Left,
            Self::Right(_) => Side::Right,
        }
    }

    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }

    /// # Errors
    ///
    /// Returns [`Fault::InvalidOperation`] if the either is right-sided.
    pub fn try_to_left(self) -> core::result::Result<L, Fault> {
        match self {
            Self::Left(l) => Ok(l),
            Self::Right(_) => Err(Fault::invalid_operation(
                "a right-sided either does not contain a left value",
            )),
        }
    }

    /// # Errors
    ///
    /// Returns [`Fault::InvalidOperation`] if the either is left-sided.
    pub fn try_to_right(self) -> core::result::Result<R, Fault> {
        match self {
            Self::Left(_) => Err(Fault::invalid_operation(
                "a left-sided either does not contain a right value",
            )),
            Self::Right(r) => Ok(r),
        }
    }

    /// # Panics
    ///
    /// Panics if the either is right-sided.
    #[track_caller]
    pub fn to_left(self) -> L {
        self.try_to_left().unwrap_or_else(|fault| fault.raise())
    }

    /// # Panics
    ///
    /// Panics if the either is left-sided.
    #[track_caller]
    pub fn to_right(self) -> R {
        self.try_to_right().unwrap_or_else(|fault| fault.raise())
    }

    pub fn to_left_or(self, default: L) -> L {
        match self {
            Self::Left(l) => l,
            Self::Right(_) => default,
        }
    }

    pub fn to_right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(r) => r,
        }
    }

    /// Folds into a single value, running only the function for the active
    /// side.
    #[doc(alias = "either")]
    pub fn to_value<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    /// Runs the action for the active side and hands the same either back.
    pub fn left_or_right(self, on_left: impl FnOnce(&L), on_right: impl FnOnce(&R)) -> Self {
        match &self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }

        self
    }

    pub fn map_both<L2, R2>(
        self,
        on_left: impl FnOnce(L) -> L2,
        on_right: impl FnOnce(R) -> R2,
    ) -> Either<L2, R2> {
        match self {
            Self::Left(l) => Either::Left(on_left(l)),
            Self::Right(r) => Either::Right(on_right(r)),
        }
    }

    pub fn map_left<L2>(self, f: impl FnOnce(L) -> L2) -> Either<L2, R> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    pub fn map_right<R2>(self, f: impl FnOnce(R) -> R2) -> Either<L, R2> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    pub fn tap_left(self, action: impl FnOnce(&L)) -> Self {
        if let Self::Left(l) = &self {
            action(l);
        }

        self
    }

    pub fn tap_right(self, action: impl FnOnce(&R)) -> Self {
        if let Self::Right(r) = &self {
            action(r);
        }

        self
    }
}

impl<L: Hash, R: Hash> Hash for Either<L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Left(l) => l.hash(state),
            Self::Right(r) => r.hash(state),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(l) => write!(f, "{l}"),
            Self::Right(r) => write!(f, "{r}"),
        }
    }
}

impl<L, R> From<Left<L>> for Either<L, R> {
    fn from(Left(l): Left<L>) -> Self {
        Self::Left(l)
    }
}

impl<L, R> From<Right<R>> for Either<L, R> {
    fn from(Right(r): Right<R>) -> Self {
        Self::Right(r)
    }
}

impl<L: PartialEq, R> PartialEq<Left<L>> for Either<L, R> {
    fn eq(&self, Left(other): &Left<L>) -> bool {
        matches!(self, Self::Left(l) if l == other)
    }
}

impl<L, R: PartialEq> PartialEq<Right<R>> for Either<L, R> {
    fn eq(&self, Right(other): &Right<R>) -> bool {
        matches!(self, Self::Right(r) if r == other)
    }
}

pub trait IntoEither: Sized {
    fn into_left<R>(self) -> Either<Self, R> {
        Either::Left(self)
    }

    fn into_right<L>(self) -> Either<L, Self> {
        Either::Right(self)
    }
}

impl<T> IntoEither for T {}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::HashSet};

    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn left_sided() {
        let either = Either::<&str, i32>::Left("a");
        assert!(either.is_left());
        assert!(!either.is_right());
        assert_eq!(either.side(), Side::Left);
        assert_eq!(either.to_left(), "a");
        assert_eq!(
            either.try_to_right(),
            Err(Fault::invalid_operation(
                "a left-sided either does not contain a right value"
            ))
        );
    }

    #[test]
    fn right_sided() {
        let either = Either::<&str, i32>::Right(4);
        assert!(either.is_right());
        assert_eq!(either.side(), Side::Right);
        assert_eq!(either.to_right(), 4);
        assert!(either.try_to_left().unwrap_err().is_invalid_operation());
    }

    #[test]
    #[should_panic(expected = "a right-sided either does not contain a left value")]
    fn to_left_of_right_panics() {
        Either::<&str, i32>::Right(1).to_left();
    }

    #[test]
    #[should_panic(expected = "a left-sided either does not contain a right value")]
    fn to_right_of_left_panics() {
        Either::<&str, i32>::Left("a").to_right();
    }

    #[test]
    fn defaults_on_wrong_side() {
        assert_eq!(Either::<&str, i32>::Right(1).to_left_or("d"), "d");
        assert_eq!(Either::<&str, i32>::Left("a").to_left_or("d"), "a");
        assert_eq!(Either::<&str, i32>::Left("a").to_right_or(0), 0);
    }

    #[test]
    fn to_value_runs_only_active_side() {
        let value = Either::<&str, i32>::Left("abc")
            .to_value(str::len, |_| -> usize { panic!("should not run") });
        assert_eq!(value, 3);

        let value = Either::<&str, i32>::Right(7)
            .to_value(|_| -> String { panic!("should not run") }, |r| r.to_string());
        assert_eq!(value, "7");
    }

    #[test]
    fn left_or_right_runs_one_action() {
        let lefts = Cell::new(0);
        let rights = Cell::new(0);

        let either = Either::<&str, i32>::Right(2).left_or_right(
            |_| lefts.set(lefts.get() + 1),
            |_| rights.set(rights.get() + 1),
        );

        assert_eq!(either, Right(2));
        assert_eq!((lefts.get(), rights.get()), (0, 1));
    }

    #[test]
    fn map_both_changes_both_types() {
        let either = Either::<&str, i32>::Left("ab").map_both(str::len, |r| r > 0);
        assert_eq!(either, Either::<usize, bool>::Left(2));
    }

    #[test]
    fn left_map_on_right_is_a_pass_through() {
        let ran = Cell::new(false);

        let either = Either::<String, i32>::Right(10)
            .map_left(|_| {
                ran.set(true);
                "hello"
            })
            .map_right(|v| v + 10);

        assert!(!ran.get());
        assert_eq!(either, Either::<&str, i32>::Right(20));
    }

    #[test]
    fn taps_keep_the_either() {
        let seen = Cell::new(0);

        let either = Either::<i32, i32>::Left(5)
            .tap_right(|_| panic!("should not run"))
            .tap_left(|l| seen.set(*l));

        assert_eq!(seen.get(), 5);
        assert_eq!(either, Left(5));
    }

    #[test]
    fn equality() {
        assert_eq!(
            Either::<&str, i32>::Left("a"),
            Either::<&str, i32>::Left("a")
        );
        assert_ne!(
            Either::<&str, i32>::Left("a"),
            Either::<&str, i32>::Right(1)
        );
        assert!(Either::<&str, i32>::Left("a") == Left("a"));
        assert!(Either::<&str, i32>::Left("a") != Right(1));
        assert!(Either::<i32, i32>::Right(1) != Left(1));
    }

    #[test]
    fn construction_through_markers() {
        let left: Either<i32, i32> = Left(1).into();
        let right: Either<i32, i32> = Right(1).into();
        assert!(left.is_left());
        assert!(right.is_right());
        assert_ne!(left, right);

        assert_eq!("x".into_left::<i32>(), Left("x"));
        assert_eq!(3_u8.into_right::<&str>(), Right(3));
        assert_eq!(Left::new(1), Left(1));
    }

    #[test]
    fn flip_and_display() {
        let either = Either::<&str, i32>::Left("a").flip();
        assert_eq!(either, Right("a"));
        assert_eq!(either.to_string(), "a");
        assert_eq!(Either::<&str, i32>::Right(9).to_string(), "9");
    }

    #[test]
    fn hashes_agree_with_equality() {
        let set: HashSet<Either<&str, i32>> = [
            Either::Left("a"),
            Either::Left("a"),
            Either::Right(1),
            Either::Right(1),
            Either::Left("b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Either::Right(1)));
        assert!(!set.contains(&Either::Right(2)));

        // same payload on opposite sides: unequal, so both are kept
        let set: HashSet<Either<i32, i32>> =
            [Either::Left(7), Either::Right(7)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let either = Either::<String, i32>::Left("a".to_owned());
        let json = serde_json::to_string(&either).unwrap();
        assert_eq!(json, r#"{"Left":"a"}"#);
        assert_eq!(serde_json::from_str::<Either<String, i32>>(&json).unwrap(), either);

        let either = Either::<String, i32>::Right(3);
        let json = serde_json::to_string(&either).unwrap();
        assert_eq!(json, r#"{"Right":3}"#);
        assert_eq!(serde_json::from_str::<Either<String, i32>>(&json).unwrap(), either);
    }

    #[quickcheck]
    fn left_round_trips(value: String) -> bool {
        Either::<String, i64>::Left(value.clone()).to_left() == value
    }

    #[quickcheck]
    fn right_round_trips(value: i64) -> bool {
        Either::<String, i64>::Right(value).to_right() == value
    }

    #[quickcheck]
    fn map_left_never_changes_a_right(value: i64) -> bool {
        Either::<String, i64>::Right(value).map_left(|l| l.len()) == Right(value)
    }
}
