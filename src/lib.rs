#![no_std]

// Tables are built once on the heap and shared through `Arc`.
extern crate alloc;

// The standard library backs the shared table cache; tests always get it
// so `cargo test` runs normally on a PC.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod dynamic;
pub mod fixed;
pub mod float;
pub mod plan;
pub mod scaling;
pub mod tables;

mod butterfly;
mod complex;
mod dct;
mod real;

#[cfg(test)]
mod test_utils;

pub use common::{Direction, FftError, FftNum, FftProcess, Format};
pub use complex::CplxFft;
pub use dct::{DCT4_LENGTHS, Dct4};
pub use dynamic::{AnyCplxFft, AnyRealFft, SampleBufferMut};
pub use fixed::{Q15, Q31};
pub use half::f16;
pub use num_complex::Complex;
pub use plan::{Radices, Radix, is_supported, supported_lengths};
pub use real::{RealFft, pack_spectrum, unpack_spectrum};
pub use scaling::{ScalingSchedule, round_trip_tolerance};
