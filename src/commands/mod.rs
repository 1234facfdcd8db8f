pub mod metadata;
pub mod parse;
pub mod sections;
pub mod timing;
