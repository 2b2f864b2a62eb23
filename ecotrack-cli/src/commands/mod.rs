//! Command implementations for the ecotrack CLI

pub mod admin;
pub mod citizen;
pub mod client;
pub mod driver;
pub mod login;
pub mod maintenance;
pub mod serve;
pub mod staff;

pub use admin::run_admin;
pub use citizen::run_citizen;
pub use driver::run_driver;
pub use login::run_login;
pub use maintenance::{run_debug_db, run_init_db, run_reset_data};
pub use serve::run_serve;
pub use staff::run_staff;
