pub mod analyzers;
pub mod error;
pub mod menu;
pub mod output;
pub mod parser;
pub mod record;
