use num::{Num, One, Zero};
use std::ops::AddAssign;

/// The numeric capabilities a matrix cell needs: ring arithmetic plus
/// in-place accumulation for the product loop.
pub trait Element: Num + Clone + Default + Copy + Zero + One + AddAssign {}
impl<T> Element for T where T: Num + Clone + Default + Copy + Zero + One + AddAssign {}
