//! Integration tests for kubesafe

mod common;
mod intercept_tests;
mod settings_tests;
