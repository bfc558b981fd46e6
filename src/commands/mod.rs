pub mod bindings;
pub mod resolve;
