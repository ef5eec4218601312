//! Wire contracts shared between the inventory front-end and the API server.
//!
//! Everything here mirrors the JSON bodies of the three inventory endpoints
//! one-to-one. Keep the types dumb: no behavior beyond (de)serialization and
//! the string codes the UI needs for `<select>` controls.

pub mod domain;
