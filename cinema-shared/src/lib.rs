//! Wire models and endpoint paths shared by Cinema clients.
#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod endpoints;
pub mod models;
