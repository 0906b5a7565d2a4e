//! Procedural ocean kernel: wave height field, ray march, shading, and the quad it is drawn on.

pub mod march;
pub mod mesh;
pub mod normal;
pub mod params;
pub mod shade;
pub mod shader;
pub mod tonemap;
pub mod waves;
