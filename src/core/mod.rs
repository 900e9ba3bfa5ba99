pub mod arith;

pub use arith::{difference, product, sum};
