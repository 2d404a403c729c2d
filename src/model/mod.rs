pub mod fixture;
pub mod raw;
