pub mod normalize_angle;
pub mod pixel_to_plane_coords;
