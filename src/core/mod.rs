// Start of file: /src/core/mod.rs

/*
* Re-export core application modules: logging setup and the server glue.
*/

pub mod logging;
pub mod server;

// End of file: /src/core/mod.rs
