pub mod errors;
pub mod model;
mod reader;

pub use errors::ParserError;
pub use model::{DepthLog, Sample};
pub use reader::{parse_depth_file, parse_depth_log};
