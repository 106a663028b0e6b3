pub mod mesh;
pub mod sprite;
