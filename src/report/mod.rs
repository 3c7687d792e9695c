pub mod console;
pub mod html;
pub mod renderer;
pub mod summary;
