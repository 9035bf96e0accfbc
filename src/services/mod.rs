pub mod applications;
pub mod auth;
pub mod evaluations;
pub mod jobs;
pub mod tests;
pub mod users;

pub use applications::ApplicationService;
pub use auth::AuthService;
pub use evaluations::EvaluationService;
pub use jobs::JobService;
pub use tests::TestService;
pub use users::UserService;
