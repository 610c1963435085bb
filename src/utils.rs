pub mod logs;
pub mod memory;
