pub mod error;
pub mod ident;
pub mod logger;
pub mod validation;
