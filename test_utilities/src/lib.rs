mod fixed_clouds;
mod random_clouds;

pub use fixed_clouds::*;
pub use random_clouds::*;
