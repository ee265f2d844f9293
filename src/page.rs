mod admin;
pub use admin::*;

mod dashboard;
pub use dashboard::*;

mod home;
pub use home::*;

mod login;
pub use login::*;

mod progress;
pub use progress::*;
