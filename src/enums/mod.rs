pub mod input_format;
pub mod render_mode;
