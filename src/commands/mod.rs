pub mod check;
pub mod readme;
pub mod scan;
