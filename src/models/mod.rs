// Module exports for models

pub mod cell;
pub mod day;
pub mod selection;
pub mod track;
