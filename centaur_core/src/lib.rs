pub mod adapter;
pub mod evaluation;
pub mod geometry;
pub mod layout;
pub mod overlay;
pub mod rules;
pub mod store;
