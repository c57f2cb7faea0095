//! Bus route topology server.
//!
//! A web application that answers questions about bus routes: what does
//! this service look like if I board here, where does a loop service go
//! after its first lap, and which bus saves me walking to a place nearby?

pub mod config;
pub mod domain;
pub mod network;
pub mod topology;
pub mod transfer;
pub mod web;

#[cfg(test)]
mod test_support;
