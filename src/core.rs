//! fixed-point arithmetic shared by every share / base asset conversion

mod math;

pub use math::mul_div;

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}
