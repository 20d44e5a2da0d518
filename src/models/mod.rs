pub mod activities;

pub use activities::{ActivityRecord, Catalog};
