pub mod access;
pub mod error;
pub mod geometry;
pub mod ports;
pub mod repo;
pub mod service;
