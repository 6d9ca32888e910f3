// Services layer for business logic
// Services own business logic and ownership checks, calling storage directly

pub mod post;
pub mod user;

pub use post::{PostService, UpdatePostError};
pub use user::{SigninError, SignupError, UserService};
