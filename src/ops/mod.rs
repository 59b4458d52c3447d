pub mod sort;
pub mod intersect;
