pub mod boundary;
pub mod cli;
pub mod config;
pub mod diagram;
pub mod domain;
pub mod error;
pub mod git;
pub mod hierarchy;
pub mod ui;

pub use error::{Result, TagLineageError};
