pub mod cli;
pub mod error;
pub mod lex;
pub mod logger;
pub mod read;
