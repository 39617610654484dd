pub mod aircraft;
pub mod characteristic;
pub mod filter;
pub mod interchange;
pub mod seed;
pub mod value;
