
mod scores;

pub use scores::*;
