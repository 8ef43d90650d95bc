pub mod quiz_score;
pub mod user;

pub use quiz_score::*;
pub use user::*;
