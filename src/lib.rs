//! anthera-site
//!
//! Theme preference, locale selection and translation resolution for the
//! ANTHERA Systems website.

pub mod cli;
pub mod config;
pub mod context;
pub mod i18n;
pub mod site;
pub mod store;
pub mod theme;

mod test_utils;

pub use context::SiteContext;
