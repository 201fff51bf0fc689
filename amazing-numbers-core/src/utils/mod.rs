pub mod sanitize;
pub use sanitize::{DesiredType, FilterError, Sanitize};

pub mod terminal;
pub use terminal::Terminal;
