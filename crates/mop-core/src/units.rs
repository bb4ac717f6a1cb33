//! Compile-time unit safety for production-planning quantities.
//!
//! Prevents mixing incompatible units like megawatts and euros per
//! megawatt-hour.
//!
//! # Design Philosophy
//!
//! Production planning involves a small number of physical and economic
//! quantities with specific units:
//! - Power setpoints and limits (MW)
//! - Marginal production cost (€/MWh)
//!
//! Using raw `f64` values throughout the codebase makes it easy to
//! accidentally mix them (e.g., adding a cost to a power limit, or passing a
//! load where a price is expected). This module provides newtype wrappers
//! that catch such errors at compile time.
//!
//! # Zero Runtime Overhead
//!
//! All types use `#[repr(transparent)]` ensuring they have the same memory
//! layout as `f64`. The compiler optimizes away all wrapper overhead.
//!
//! # Usage
//!
//! ```
//! use mop_core::units::{EurosPerMegawattHour, Megawatts};
//!
//! let load = Megawatts(480.0);
//! let price = EurosPerMegawattHour(13.4);
//!
//! // This compiles - same units
//! let headroom = load - Megawatts(90.0);
//!
//! // This would NOT compile - different units
//! // let wrong = load + price;
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Macro to implement common arithmetic operations for unit types
macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Mul<$type> for f64 {
            type Output = $type;
            fn mul(self, rhs: $type) -> Self::Output {
                <$type>::new(self * rhs.0)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Div<$type> for $type {
            type Output = f64;
            fn div(self, rhs: $type) -> Self::Output {
                self.0 / rhs.0
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.1} {}", self.0, $unit_name)
            }
        }

        impl $type {
            /// Create a new value
            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Get the raw numeric value
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }

            /// Absolute value
            #[inline]
            pub fn abs(self) -> Self {
                Self(self.0.abs())
            }

            /// Check if value is finite
            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }

            /// Minimum of two values
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            /// Maximum of two values
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }

            /// Clamp value to range
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self(self.0.clamp(min.0, max.0))
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }

        impl<'a> std::iter::Sum<&'a $type> for $type {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }
    };
}

/// Active power in megawatts (MW)
///
/// Used for plant operating limits (pmin/pmax), the requested load, and
/// assigned production setpoints.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Megawatts(pub f64);

impl_unit_ops!(Megawatts, "MW");

impl Megawatts {
    /// Zero megawatts
    pub const ZERO: Self = Self(0.0);
}

/// Marginal production cost in euros per megawatt-hour (€/MWh)
///
/// The merit-order ranking key: plants are activated cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct EurosPerMegawattHour(pub f64);

impl_unit_ops!(EurosPerMegawattHour, "€/MWh");

impl EurosPerMegawattHour {
    /// Free production (wind)
    pub const ZERO: Self = Self(0.0);
}

impl Mul<Megawatts> for EurosPerMegawattHour {
    type Output = f64;

    /// Hourly production cost in euros: €/MWh × MW = €/h
    fn mul(self, rhs: Megawatts) -> Self::Output {
        self.0 * rhs.0
    }
}
