pub mod applications;

pub mod auth;

pub mod evaluations;

pub mod jobs;

pub mod tests;

pub mod users;

pub use applications::configure_applications_routes;
pub use auth::configure_auth_routes;
pub use evaluations::configure_evaluations_routes;
pub use jobs::configure_jobs_routes;
pub use tests::configure_tests_routes;
pub use users::configure_user_routes;
