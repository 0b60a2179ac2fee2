use std::fmt::{Debug, Display};

use nalgebra::RealField;
use num_traits::{Float as NumFloat, FromPrimitive};

/// Marker trait for base floating-point types (`f32`, `f64`).
///
/// Bundles the numeric traits needed by the augmented-number algebra and
/// the nalgebra storage behind it. Only primitive float types implement
/// this.
pub trait Float:
    NumFloat + FromPrimitive + RealField + Copy + Send + Sync + Default + Debug + Display + 'static
{
}

impl Float for f32 {}
impl Float for f64 {}
