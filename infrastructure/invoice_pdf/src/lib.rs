pub mod canvas;
pub mod renderer;
