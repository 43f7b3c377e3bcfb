// Service module exports

pub mod color;
pub mod scheduler;
