pub mod ident;
pub mod types;
