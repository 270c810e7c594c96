use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ConfigurationError;

use super::CaseSpec;

/// Input widget kind for one tunable parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterKind {
    /// Section header; carries no value.
    Group,
    Checkbox { checked: bool },
    Int {
        initial: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        step: Option<i64>,
    },
}

/// Description of one parameter for a form collaborator.
///
/// `name` is the dotted path of the matching [`CaseSpec`] field, so the
/// values a form returns can be fed to [`case_from_form`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDefinition {
    pub name: &'static str,
    pub caption: &'static str,
    #[serde(flatten)]
    pub kind: ParameterKind,
}

impl ParameterDefinition {
    fn group(name: &'static str, caption: &'static str) -> Self {
        Self {
            name,
            caption,
            kind: ParameterKind::Group,
        }
    }

    fn checkbox(name: &'static str, caption: &'static str, checked: bool) -> Self {
        Self {
            name,
            caption,
            kind: ParameterKind::Checkbox { checked },
        }
    }

    fn int(
        name: &'static str,
        caption: &'static str,
        initial: i64,
        min: Option<i64>,
        step: Option<i64>,
    ) -> Self {
        Self {
            name,
            caption,
            kind: ParameterKind::Int { initial, min, step },
        }
    }
}

/// The user-facing parameters, in form order, initialised from the
/// [`CaseSpec`] defaults.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parameter_definitions() -> Vec<ParameterDefinition> {
    let case = CaseSpec::default();
    let (show, features) = (case.show, case.features);
    let rim_gap = case.rim_gap.round() as i64;
    vec![
        ParameterDefinition::group("board", "Raspberry PI:"),
        ParameterDefinition::checkbox("show.board", "View?", show.board),
        ParameterDefinition::group("base", "Base:"),
        ParameterDefinition::checkbox("show.base", "View?", show.base),
        ParameterDefinition::group("cover", "Cover:"),
        ParameterDefinition::checkbox("show.cover", "View?", show.cover),
        ParameterDefinition::int("rim_gap", "Rim Vent (mm)?", rim_gap, Some(0), Some(1)),
        ParameterDefinition::checkbox("features.dim_slot", "Expose DIM Slot?", features.dim_slot),
        ParameterDefinition::checkbox("features.leds", "Expose LEDs?", features.leds),
        ParameterDefinition::checkbox(
            "features.network",
            "Expose Network Port?",
            features.network,
        ),
        ParameterDefinition::checkbox(
            "features.usb_bank1",
            "Expose USB Bank 1?",
            features.usb_bank1,
        ),
        ParameterDefinition::checkbox(
            "features.usb_bank2",
            "Expose USB Bank 2?",
            features.usb_bank2,
        ),
        ParameterDefinition::checkbox("features.usb_lip", "Addition Support?", features.usb_lip),
        ParameterDefinition::group("others", "Others Settings:"),
        ParameterDefinition::int("segments", "Segments?", case.segments, None, None),
    ]
}

/// Builds a [`CaseSpec`] from flat form values keyed by parameter name.
///
/// Dotted names address nested fields; unknown names are rejected and
/// missing ones keep their defaults.
///
/// # Errors
///
/// Returns [`ConfigurationError::Parse`] if a value has the wrong type or a
/// name matches no field.
pub fn case_from_form(values: &Map<String, Value>) -> Result<CaseSpec, ConfigurationError> {
    let mut nested = serde_json::to_value(CaseSpec::default())?;
    for (name, value) in values {
        let mut slot = &mut nested;
        for key in name.split('.') {
            slot = slot.get_mut(key).ok_or_else(|| {
                let message = format!("unknown parameter `{name}`");
                <serde_json::Error as serde::de::Error>::custom(message)
            })?;
        }
        *slot = value.clone();
    }
    Ok(serde_json::from_value(nested)?)
}
