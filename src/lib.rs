// src/lib.rs

//! campusview: terminal client for the academy's public website API

pub mod error;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;
pub mod view;
