pub mod includable;
pub mod modulepath;
