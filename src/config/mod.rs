pub mod board;
pub mod case;
pub mod envelope;
pub mod parameters;
pub mod resolve;

pub use board::BoardSpec;
pub use case::{CaseSpec, CoverFeatures, Visibility};
pub use envelope::{BoardEnvelope, Outline, RimVentLayout};
pub use parameters::{case_from_form, parameter_definitions, ParameterDefinition, ParameterKind};
pub use resolve::{ConfigWarning, ConfigurationResolver, ResolvedConfig, MAX_SEGMENTS};
