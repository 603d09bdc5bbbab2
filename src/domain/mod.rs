pub mod leaf;
pub mod merkle;
pub mod tree;
