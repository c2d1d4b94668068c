extern crate clap;
extern crate vfspack;

pub mod cli;
pub mod error;
