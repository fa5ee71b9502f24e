use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

/// A trait representing an edge capacity (and flow) type, which is a signed integer.
///
/// Flow is skew-symmetric, so the type has to represent negated capacities too. Overflow is not
/// checked: every partial sum of capacities in a network must fit in the type. Values widen
/// losslessly to `i128`, which is how errors report them.
pub trait Capacity:
    Copy
    + Into<i128>
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + Debug
    + Display
    + Default
{
}

impl Capacity for i32 {}

impl Capacity for i64 {}

impl Capacity for i128 {}
