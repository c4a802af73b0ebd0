mod bitrev;
mod cache;
mod twiddle;

pub use bitrev::BitReversalTable;
pub use cache::TableCache;
pub use twiddle::TwiddleTable;
