pub mod drift;
pub mod presets;
pub mod timeline;
