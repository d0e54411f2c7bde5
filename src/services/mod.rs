pub mod submissions;
pub mod users;
pub mod work_categories;

pub use submissions::{SubmissionService, SubmissionView};
pub use users::UserService;
pub use work_categories::WorkCategoryService;
