pub mod submissions;

pub mod users;

pub mod work_categories;

pub use submissions::configure_submissions_routes;
pub use users::configure_user_routes;
pub use work_categories::configure_work_categories_routes;
