use std::{cmp::Ordering, ops::Add};

mod ordered;

pub use ordered::OrderedFloat;

/// Edge weight usable by the weighted algorithms.
///
/// The associated `Ord` type is a totally ordered proxy so that weights can
/// be used as keys in sorting and priority queues even when the weight type
/// itself (floats) implements only `PartialOrd`.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;
    fn inf() -> Self;
    fn is_unsigned() -> bool;
}

/// A value paired with a weight, compared by the weight only. Used as the
/// item type of the priority queues in Dijkstra's and Prim's algorithms.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
