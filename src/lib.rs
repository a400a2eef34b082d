#[macro_use]
extern crate lazy_static;

pub mod episodes;
pub mod error;
pub mod event;
pub mod format;
pub mod models;
pub mod parser;
pub mod requester;
pub mod saver;

mod util;
