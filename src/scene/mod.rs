pub mod drawable;
pub mod label;
pub mod mask;
pub mod node;
pub mod quad;
pub mod shapes;
