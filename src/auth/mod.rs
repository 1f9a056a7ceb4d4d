pub mod middleware;
pub mod password;
pub mod token;

pub use middleware::{optional_auth, require_auth};
pub use token::{Claims, TokenSigner};
