pub mod controller;
pub mod frame;
