//! Typed surrogate ids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// A database generated `BIGSERIAL` id tagged with the record it identifies,
/// so a cart id can never be passed where a product id is expected.
pub struct TypedId<T>(i64, PhantomData<T>);

impl<T> TypedId<T> {
    pub const fn from_i64(id: i64) -> Self {
        Self(id, PhantomData)
    }

    #[must_use]
    pub const fn into_i64(self) -> i64 {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<i64> for TypedId<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<TypedId<T>> for i64 {
    fn from(value: TypedId<T>) -> Self {
        value.into_i64()
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    struct Widget;

    #[test]
    fn ids_compare_by_inner_value() {
        let a = TypedId::<Widget>::from_i64(1);
        let b = TypedId::<Widget>::from(2);

        assert!(a < b);
        assert_eq!(a, TypedId::from_i64(1));
        assert_eq!(i64::from(b), 2);
    }

    #[test]
    fn ids_hash_like_their_inner_value() {
        let set: FxHashSet<TypedId<Widget>> =
            [1, 2, 2, 3].into_iter().map(TypedId::from_i64).collect();

        assert_eq!(set.len(), 3);
    }

    #[test]
    fn ids_display_as_plain_numbers() {
        assert_eq!(TypedId::<Widget>::from_i64(42).to_string(), "42");
    }
}
