pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod parts;
pub mod pipeline;
pub mod solid;

pub use config::{BoardSpec, CaseSpec, ConfigurationResolver, ResolvedConfig};
pub use error::{ConfigurationError, EnclosureError, GeometryError, Result};
pub use parts::{Assembly, Part, PartKind};
pub use solid::{Color, Solid};

/// Resolves `case` against the Raspberry Pi 2 and builds the visible parts.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] if the parameters are rejected, or a
/// [`GeometryError`] if a part cannot be built.
pub fn generate(case: CaseSpec) -> Result<Vec<Part>> {
    let config = ConfigurationResolver::new(BoardSpec::RASPBERRY_PI_2, case).resolve()?;
    Assembly::new(&config).execute()
}

/// Like [`generate`], reading the parameters from JSON.
///
/// # Errors
///
/// Returns [`ConfigurationError::Parse`] for malformed JSON, otherwise as
/// [`generate`].
pub fn generate_from_json(json: &str) -> Result<Vec<Part>> {
    generate(CaseSpec::from_json(json)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn default_parts_have_expected_bounds() {
        init_tracing();
        let parts = generate(CaseSpec::default()).unwrap();
        assert_eq!(parts.len(), 3);

        let expected = [
            ([-28.0, -43.5, 4.5], [28.0, 41.5, 5.85]),
            ([-28.25, -43.75, 0.0], [30.5, 43.75, 7.85]),
            ([-30.5, -46.0, 0.0], [30.5, 46.0, 28.0]),
        ];
        for (part, (min, max)) in parts.iter().zip(expected) {
            let b = part.solid.bounding_box().unwrap();
            for i in 0..3 {
                assert_abs_diff_eq!(b.min[i], min[i], epsilon = 1e-9);
                assert_abs_diff_eq!(b.max[i], max[i], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn json_parameters_reach_the_parts() {
        init_tracing();
        let parts = generate_from_json(r#"{"show": {"board": false}, "rim_gap": 0}"#).unwrap();
        assert_eq!(parts.len(), 2);
        let cover = parts[1].solid.bounding_box().unwrap();
        assert_abs_diff_eq!(cover.max.z, 24.5);
    }

    #[test]
    fn rejected_parameters_build_nothing() {
        let err = generate(CaseSpec {
            base_wall: 0.0,
            ..CaseSpec::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            EnclosureError::Configuration(ConfigurationError::NonPositive { .. })
        ));

        assert!(matches!(
            generate_from_json("{\"vent_count\": \"many\"}"),
            Err(EnclosureError::Configuration(ConfigurationError::Parse(_)))
        ));
    }
}
