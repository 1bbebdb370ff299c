//! Command implementations for the apisites CLI

pub mod export;
pub mod list;
pub mod load;
pub mod lookup;
pub mod profiles;
pub mod show;
pub mod validate;
