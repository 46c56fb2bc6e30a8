pub mod serialization;
pub mod timing;
