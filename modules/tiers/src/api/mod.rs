//! API layer - REST transport and in-process native client

pub mod native;
pub mod rest;
