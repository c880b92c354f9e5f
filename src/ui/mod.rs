pub mod content;
pub mod controls;
pub mod interaction;
pub mod resources;
pub mod state;
pub mod systems;
