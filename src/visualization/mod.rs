pub mod axes;
pub mod colormap;
pub mod hover;
pub mod mesh;
pub mod scene;
pub mod surface;
