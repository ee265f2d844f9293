mod course;
pub use course::*;

mod summary;
pub use summary::*;

mod user;
pub use user::*;
