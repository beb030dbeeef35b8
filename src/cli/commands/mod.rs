//! Command implementations

mod check;
mod init;
mod setup;
mod users;
mod watch;

pub use check::check;
pub use init::init;
pub use users::users;
pub use watch::watch;
