mod token;

pub use token::TokenManager;
pub use token::current_token;
pub use token::logout;
