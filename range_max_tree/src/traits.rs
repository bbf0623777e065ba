pub trait NegativeInfinity {
    fn negative_infinity() -> Self;
}

macro_rules! impl_negative_infinity_min {
    ($($t:ty),*) => {
        $(
            impl NegativeInfinity for $t {
                fn negative_infinity() -> Self {
                    <$t>::MIN
                }
            }
        )*
    };
}

impl_negative_infinity_min!(i8, i16, i32, i64, i128, isize);
impl_negative_infinity_min!(u8, u16, u32, u64, u128, usize);
