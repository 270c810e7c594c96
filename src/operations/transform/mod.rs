mod general;
mod rotate;
mod translate;

pub use general::GeneralTransform;
pub use rotate::Rotate;
pub use translate::Translate;
