pub mod entity;
pub mod record;
pub mod value;

pub use entity::*;
pub use record::*;
pub use value::*;
