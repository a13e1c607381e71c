pub mod contact;
pub mod error_shape;
pub mod instructors;
pub mod read_degrade;
