// Authentication module
// Provides signup, login, and JWT bearer-token verification

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{login_handler, signup_handler};
pub use middleware::AuthenticatedUser;
pub use models::{LoginRequest, SignupRequest, TokenResponse, User, UserResponse};
pub use repository::UserRepository;
pub use service::AuthService;
pub use token::TokenService;
