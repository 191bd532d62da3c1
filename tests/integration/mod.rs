mod auth_tests;
mod common;
