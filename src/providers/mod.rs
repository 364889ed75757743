mod linkedin;
mod traits;

pub use linkedin::LinkedInProvider;
pub use traits::{error_detail, OAuthProvider, TokenSet};
