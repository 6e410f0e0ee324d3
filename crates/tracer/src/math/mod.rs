pub mod point;
pub mod vec;
