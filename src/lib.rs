// lib.rs - Library root for the themely theme customization engine

pub mod cli;
pub mod config;
pub mod controller;
pub mod overlay;
pub mod registry;
pub mod resolver;
pub mod sink;
pub mod store;
