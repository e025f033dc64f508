//! Player registration wizard
//!
//! A four-step form. Each step owns a set of [`FieldRules`]; the wizard only
//! advances when the current step validates, and [`PlayerWizard::submit`]
//! re-checks every step before building the [`Player`].

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::field::FieldValue;
use crate::core::validation::{FieldRules, filters, validators};
use crate::domain::catalog::HOME_CLUB;
use crate::domain::records::Player;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const POSITIONS: [&str; 5] = ["Goalkeeper", "Defender", "Midfielder", "Winger", "Forward"];
pub const FEET: [&str; 3] = ["left", "right", "both"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Identity,
    Physical,
    Contract,
    Review,
}

impl WizardStep {
    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Identity => Some(WizardStep::Physical),
            WizardStep::Physical => Some(WizardStep::Contract),
            WizardStep::Contract => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Identity => None,
            WizardStep::Physical => Some(WizardStep::Identity),
            WizardStep::Contract => Some(WizardStep::Physical),
            WizardStep::Review => Some(WizardStep::Contract),
        }
    }

    /// Rules of the fields collected on this step
    pub fn rules(self) -> FieldRules {
        match self {
            WizardStep::Identity => FieldRules::new()
                .filter("name", filters::trim())
                .filter("name", filters::title_case())
                .validate("name", validators::required())
                .validate("name", validators::string_length(2, 60))
                .filter("age", filters::numeric())
                .validate("age", validators::required())
                .validate("age", validators::is_integer())
                .validate("age", validators::number_range(15.0, 45.0))
                .filter("nationality", filters::trim())
                .validate("nationality", validators::required()),
            WizardStep::Physical => FieldRules::new()
                .filter("position", filters::trim())
                .validate("position", validators::required())
                .validate("position", validators::in_list(owned(&POSITIONS)))
                .filter("height_cm", filters::numeric())
                .validate("height_cm", validators::required())
                .validate("height_cm", validators::is_integer())
                .validate("height_cm", validators::number_range(140.0, 220.0))
                .filter("preferred_foot", filters::trim())
                .validate("preferred_foot", validators::required())
                .validate("preferred_foot", validators::in_list(owned(&FEET))),
            WizardStep::Contract => FieldRules::new()
                .filter("jersey_number", filters::numeric())
                .validate("jersey_number", validators::required())
                .validate("jersey_number", validators::is_integer())
                .validate("jersey_number", validators::number_range(1.0, 99.0))
                .filter("market_value", filters::trim())
                .validate("market_value", validators::required())
                .filter("contract_until", filters::trim())
                .validate("contract_until", validators::required())
                .validate("contract_until", validators::date_format("%Y-%m-%d")),
            WizardStep::Review => FieldRules::new(),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::Identity => "identity",
            WizardStep::Physical => "physical",
            WizardStep::Contract => "contract",
            WizardStep::Review => "review",
        };
        f.write_str(name)
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// In-progress registration of a new roster player
#[derive(Debug, Clone)]
pub struct PlayerWizard {
    step: WizardStep,
    values: IndexMap<String, FieldValue>,
    errors: Vec<FieldValidationError>,
}

impl Default for PlayerWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Identity,
            values: IndexMap::new(),
            errors: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Errors from the last failed `next` or `submit`
    pub fn errors(&self) -> &[FieldValidationError] {
        &self.errors
    }

    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> &mut Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Validate the current step and move forward.
    ///
    /// On failure the wizard stays on the current step and the errors are
    /// kept for display.
    pub fn next(&mut self) -> Result<WizardStep, ValidationError> {
        self.check(self.step)?;
        if let Some(next) = self.step.next() {
            debug!(from = %self.step, to = %next, "wizard advanced");
            self.step = next;
        }
        Ok(self.step)
    }

    /// Go back one step; values are kept
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.errors.clear();
        self.step
    }

    /// Build the player from the review step
    pub fn submit(&mut self) -> Result<Player, ValidationError> {
        if self.step != WizardStep::Review {
            return Err(ValidationError::Incomplete {
                step: self.step.to_string(),
            });
        }

        for step in [WizardStep::Identity, WizardStep::Physical, WizardStep::Contract] {
            if let Err(e) = self.check(step) {
                self.step = step;
                return Err(e);
            }
        }

        let player = Player::new(
            self.text("name"),
            self.text("position"),
            self.number("age"),
            self.text("nationality"),
            HOME_CLUB.to_string(),
            self.number("jersey_number"),
            self.number("height_cm"),
            self.text("preferred_foot"),
            0,
            self.text("market_value"),
            self.text("contract_until"),
            "active".to_string(),
        );
        debug!(id = %player.id, name = %player.name, "player registered");
        Ok(player)
    }

    fn check(&mut self, step: WizardStep) -> Result<(), ValidationError> {
        match step.rules().apply(&mut self.values) {
            Ok(()) => {
                self.errors.clear();
                Ok(())
            }
            Err(ValidationError::FieldErrors(errors)) => {
                self.errors = errors.clone();
                Err(ValidationError::FieldErrors(errors))
            }
            Err(e) => Err(e),
        }
    }

    fn text(&self, field: &str) -> String {
        self.values
            .get(field)
            .and_then(FieldValue::as_string)
            .unwrap_or_default()
            .to_string()
    }

    fn number(&self, field: &str) -> u32 {
        self.values
            .get(field)
            .and_then(|value| match value {
                FieldValue::Integer(n) => u32::try_from(*n).ok(),
                _ => None,
            })
            .unwrap_or_default()
    }
}
