mod lock_mono;
mod status;

pub use lock_mono::*;
pub use status::*;
