//! Authentication and session management for the Robinhood API.
//!
//! Authentication is delegated to a [`TokenSource`]: any collaborator that can
//! produce a bearer [`Token`] on demand. The crate ships one standard source,
//! [`OAuthTokenSource`], which performs the password-grant exchange against
//! the login endpoint; callers with their own credential machinery (cached
//! tokens, external vaults) implement the trait themselves.
//!
//! A [`Session`] wraps a source, caches the current token, and refreshes it
//! when it is about to expire.
//!
//! ```no_run
//! use robinhood_rs::auth::{OAuthTokenSource, Session};
//!
//! # async fn example() -> robinhood_rs::Result<()> {
//! let source = OAuthTokenSource::new("username", "password");
//! let session = Session::from_source(source).await?;
//! # Ok(())
//! # }
//! ```

mod session;
mod token;

pub use session::Session;
pub use token::{OAuthTokenSource, Token, TokenSource, DEFAULT_CLIENT_ID};
