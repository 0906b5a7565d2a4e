pub mod composite;
pub mod pipeline;
pub mod renderer;
pub mod surface;
pub mod texture;
