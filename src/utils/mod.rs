// Start of file: /src/utils/mod.rs

/*
    * Re-exports for cross-cutting helpers. Currently the global error
    * handler used by the layer stack.
*/

pub mod error_handler;

// End of file: /src/utils/mod.rs
