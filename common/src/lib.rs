pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod maze;
pub mod render;
pub mod search;
pub mod session;
pub mod test_helpers;
pub mod visited;
