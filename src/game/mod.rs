pub mod board;
pub mod body;
pub mod collision;
pub mod constants;
pub mod food;
pub mod head;
pub mod history;
pub mod input;
pub mod math;
pub mod pool;
pub mod score;
pub mod session;
pub mod snake;
pub mod timer;
pub mod types;
