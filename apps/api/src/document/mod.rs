// Resume document core: versioned model, format detection, legacy conversion,
// Markdown rendering. Everything here is pure and synchronous — the HTTP and
// persistence layers compose over it.

pub mod convert;
pub mod detect;
pub mod handlers;
pub mod models;
pub mod render;
