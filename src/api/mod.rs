//! API module
//!
//! Contains HTTP request handlers for the activity signup endpoints

pub mod activities;
