pub mod constants;
pub mod curvature;
pub mod mass;
pub mod presets;
