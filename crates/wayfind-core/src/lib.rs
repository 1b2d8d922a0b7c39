pub mod config;
pub mod logging;

pub mod cdx;
pub mod completion;
pub mod opener;
pub mod shell;
