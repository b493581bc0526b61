pub mod banner;
pub mod colors;
pub mod format;
pub mod logging;
pub mod print;
pub mod sink;
