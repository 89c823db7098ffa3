pub mod cursor;
pub mod order;
