mod crockford;
mod ulid;

pub use crockford::*;
pub use ulid::*;
