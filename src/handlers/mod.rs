pub mod diagnostics_handler;
pub mod generate_handler;
pub mod system_handler;

pub use diagnostics_handler::test_database;
pub use generate_handler::generate;
pub use system_handler::{api_hello, health_check, not_found, root};
