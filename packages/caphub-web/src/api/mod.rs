//! REST client for the capability directory API

mod client;

pub use client::*;
