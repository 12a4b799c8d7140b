pub mod address;
pub mod derive;
pub mod hash;
pub mod keys;
pub mod seed;
