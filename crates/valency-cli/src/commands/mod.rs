pub mod elements;
pub mod oxidation;
pub mod shells;
