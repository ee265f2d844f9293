mod avatar;
pub use avatar::*;

mod course_card;
pub use course_card::*;

mod footer;
pub use footer::*;

mod notice;
pub use notice::*;

mod progress_bar;
pub use progress_bar::*;

mod progress_form;
pub use progress_form::*;

mod sidebar;
pub use sidebar::*;
