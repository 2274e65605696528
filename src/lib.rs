// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logger;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod gui;
pub mod i18n;
