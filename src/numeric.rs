//! Sign and zero inspection for the primitive numeric types.

/// A primitive number that the sign and zero guards can inspect.
///
/// Floats follow IEEE comparison: `-0.0` is zero but not negative, and `NaN`
/// is neither.
pub trait Numeric: Copy + PartialOrd {
    const ZERO: Self;

    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_numeric {
    ($zero:expr => $($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);
