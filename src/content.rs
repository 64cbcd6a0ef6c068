//! "Has no content" inspection for the empty-collection guard.
use crate::numeric::Numeric;
use crate::value::Value;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{OsStr, OsString};

/// A value that may carry no content.
///
/// Containers and strings are empty when they hold no elements. Numbers are
/// empty when they are zero, and `Option` is empty when it is `None` or its
/// payload is empty.
pub trait Emptiable {
    fn is_content_empty(&self) -> bool;
}

impl<E: Emptiable + ?Sized> Emptiable for &E {
    fn is_content_empty(&self) -> bool {
        (**self).is_content_empty()
    }
}

impl<E: Emptiable + ?Sized> Emptiable for &mut E {
    fn is_content_empty(&self) -> bool {
        (**self).is_content_empty()
    }
}

impl<E: Emptiable + ?Sized> Emptiable for Box<E> {
    fn is_content_empty(&self) -> bool {
        (**self).is_content_empty()
    }
}

impl<E: Emptiable> Emptiable for Option<E> {
    fn is_content_empty(&self) -> bool {
        self.as_ref().map_or(true, Emptiable::is_content_empty)
    }
}

macro_rules! impl_emptiable_via_is_empty {
    ($([$($g:tt)*] $t:ty),* $(,)?) => {
        $(
            impl<$($g)*> Emptiable for $t {
                fn is_content_empty(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

impl_emptiable_via_is_empty!(
    [] str,
    [] String,
    [] OsStr,
    [] OsString,
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [T] BTreeSet<T>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [K, V, S] HashMap<K, V, S>,
);

macro_rules! impl_emptiable_for_numeric {
    ($($t:ty),*) => {
        $(
            impl Emptiable for $t {
                fn is_content_empty(&self) -> bool {
                    self.is_zero()
                }
            }
        )*
    };
}

impl_emptiable_for_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Emptiable for bool {
    fn is_content_empty(&self) -> bool {
        !*self
    }
}

impl Emptiable for Value {
    fn is_content_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => b.is_content_empty(),
            Value::Integer(n) => n.is_content_empty(),
            Value::Float(n) => n.is_content_empty(),
            Value::Text(s) => s.is_empty(),
            Value::Bytes(b) => b.is_empty(),
            // A path names a location; it is content even when it names nothing.
            Value::Path(_) => false,
            Value::List(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
        }
    }
}
