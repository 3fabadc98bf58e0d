pub mod error;
pub mod fields;
pub mod letters;
pub mod options;

pub use error::*;
pub use fields::*;
pub use letters::*;
pub use options::*;
