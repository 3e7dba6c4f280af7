//! End-to-end API tests.
//!
//! These tests need a PostgreSQL instance; set `STRATUS_TEST_DATABASE_URL`
//! to run them. Without it every test logs a skip notice and passes.

mod helpers;

mod auth_test;
mod file_test;
mod permission_test;
mod search_test;
mod share_test;
