mod user;

pub use user::{UserInfo, UserRole};
