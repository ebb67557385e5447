pub mod handlers;

pub use handlers::run_interactive;
