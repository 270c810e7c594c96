mod engine;
mod intersect_op;
mod subtract;
mod union;

pub use engine::boolean_execute;
pub use intersect_op::Intersect;
pub use subtract::Subtract;
pub use union::Union;
