pub mod counter;
pub mod hold;
pub mod pink_noise;

pub use self::counter::{cdelay, wrap};
pub use self::hold::HoldNoise;
pub use self::pink_noise::{PinkNoise, MAX_BANDS};
