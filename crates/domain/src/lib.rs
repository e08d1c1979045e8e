#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod message;
mod package;
mod training;

pub use error::*;
pub use message::*;
pub use package::*;
pub use training::*;
