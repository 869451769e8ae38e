mod role;
mod users;

pub use role::role;
pub use users::users;
