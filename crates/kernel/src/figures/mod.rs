pub mod cone;
pub mod spruce;
pub mod trunk;

pub use cone::{SIDES_COUNT, build_cone};
pub use spruce::{Spruce, build_spruce};
pub use trunk::{Parallelepiped, TrunkParams, build_trunk};
