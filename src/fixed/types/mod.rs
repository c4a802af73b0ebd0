mod fixed;

pub use fixed::{Q15, Q31};
