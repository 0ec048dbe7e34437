pub use crate::{
    counter::{CounterService, parse_count},
    error::CounterError,
    handler::{ViewsResponse, handle_request},
};

pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod handler;
pub mod store;
