use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod config;
pub mod engine;
pub mod format;
pub mod frontmatter;
pub mod index;
pub mod token;

pub type Tendril = SmartString<LazyCompact>;
