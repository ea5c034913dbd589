pub mod affine;
pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod vec2;
pub mod viewport;
