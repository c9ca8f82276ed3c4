//! Core domain types shared across the entire Idea Mashup workspace.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// Element Categories
// =============================================================================

/// Classification tag for a textual building block of an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    /// Who the idea is for.
    Persona,
    /// What they struggle with.
    Problem,
    /// What the solution is built with.
    Technology,
    /// Shape of the product (app, platform, ...).
    Format,
    /// How the product makes money.
    BusinessModel,
    /// Distribution channel. Selectable, never part of the description.
    Channel,
    /// Verb describing what the product does to the workflow.
    ActionVerb,
    /// Market trend the idea leans on.
    Trend,
}

impl ElementType {
    /// Every element type, in declaration order.
    pub const ALL: [ElementType; 8] = [
        ElementType::Persona,
        ElementType::Problem,
        ElementType::Technology,
        ElementType::Format,
        ElementType::BusinessModel,
        ElementType::Channel,
        ElementType::ActionVerb,
        ElementType::Trend,
    ];

    /// Categories present in every generated idea, in composition order.
    pub const CORE: [ElementType; 4] = [
        ElementType::Persona,
        ElementType::Problem,
        ElementType::Technology,
        ElementType::BusinessModel,
    ];

    /// Storage identifier of the element type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Persona => "persona",
            ElementType::Problem => "problem",
            ElementType::Technology => "technology",
            ElementType::Format => "format",
            ElementType::BusinessModel => "business_model",
            ElementType::Channel => "channel",
            ElementType::ActionVerb => "action_verb",
            ElementType::Trend => "trend",
        }
    }

    /// Whether this type is always part of a generated idea.
    pub fn is_core(&self) -> bool {
        Self::CORE.contains(self)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing an unknown element type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element type: {0}")]
pub struct UnknownElementType(pub String);

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownElementType(s.to_string()))
    }
}

/// The categories a configuration can switch on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalCategory {
    Format,
    Channel,
    ActionVerb,
    Trend,
}

impl OptionalCategory {
    /// Optional categories in the order they are appended after the core ones.
    pub const ALL: [OptionalCategory; 4] = [
        OptionalCategory::Format,
        OptionalCategory::Channel,
        OptionalCategory::ActionVerb,
        OptionalCategory::Trend,
    ];

    /// The element type backing this category.
    pub fn element_type(&self) -> ElementType {
        match self {
            OptionalCategory::Format => ElementType::Format,
            OptionalCategory::Channel => ElementType::Channel,
            OptionalCategory::ActionVerb => ElementType::ActionVerb,
            OptionalCategory::Trend => ElementType::Trend,
        }
    }

    /// Whether the given config switches this category on.
    pub fn is_enabled(&self, config: &GenerationConfig) -> bool {
        match self {
            OptionalCategory::Format => config.include_formats,
            OptionalCategory::Channel => config.include_channels,
            OptionalCategory::ActionVerb => config.include_action_verbs,
            OptionalCategory::Trend => config.include_trends,
        }
    }
}

/// A single stored building block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationElement {
    /// Unique identifier.
    pub id: Uuid,
    /// Category of the element.
    #[serde(rename = "type")]
    pub element_type: ElementType,
    /// Text inserted into ideas.
    pub content: String,
    /// Inactive elements are never selected.
    pub active: bool,
    /// When the element was stored.
    pub created_at: DateTime<Utc>,
}

impl GenerationElement {
    /// Create a new active element.
    pub fn new(element_type: ElementType, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            element_type,
            content: content.into(),
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Mark the element as inactive.
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

// =============================================================================
// Generation Config
// =============================================================================

/// Which optional categories participate in a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    pub include_formats: bool,
    pub include_channels: bool,
    pub include_action_verbs: bool,
    pub include_trends: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            include_formats: true,
            include_channels: false,
            include_action_verbs: true,
            include_trends: true,
        }
    }
}

impl GenerationConfig {
    /// Config with every optional category disabled.
    pub fn core_only() -> Self {
        Self {
            include_formats: false,
            include_channels: false,
            include_action_verbs: false,
            include_trends: false,
        }
    }

    /// Config with every optional category enabled.
    pub fn everything() -> Self {
        Self {
            include_formats: true,
            include_channels: true,
            include_action_verbs: true,
            include_trends: true,
        }
    }

    /// Produce a new config with the overrides applied on top of this one.
    pub fn merged(&self, overrides: &GenerationConfigOverrides) -> Self {
        Self {
            include_formats: overrides.include_formats.unwrap_or(self.include_formats),
            include_channels: overrides.include_channels.unwrap_or(self.include_channels),
            include_action_verbs: overrides
                .include_action_verbs
                .unwrap_or(self.include_action_verbs),
            include_trends: overrides.include_trends.unwrap_or(self.include_trends),
        }
    }
}

/// Partial config; unset fields fall back to the base config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_formats: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_channels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_action_verbs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_trends: Option<bool>,
}

impl GenerationConfigOverrides {
    /// Whether no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<GenerationConfig> for GenerationConfigOverrides {
    fn from(config: GenerationConfig) -> Self {
        Self {
            include_formats: Some(config.include_formats),
            include_channels: Some(config.include_channels),
            include_action_verbs: Some(config.include_action_verbs),
            include_trends: Some(config.include_trends),
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// One picked value per participating category.
///
/// Core slots are always filled; optional slots are filled only when the
/// category was resolved for the generation that produced the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub persona: String,
    pub problem: String,
    pub technology: String,
    pub business_model: String,
    pub format: Option<String>,
    pub channel: Option<String>,
    pub action_verb: Option<String>,
    pub trend: Option<String>,
}

impl Selection {
    /// Create a selection holding only the core categories.
    pub fn new(
        persona: impl Into<String>,
        problem: impl Into<String>,
        technology: impl Into<String>,
        business_model: impl Into<String>,
    ) -> Self {
        Self {
            persona: persona.into(),
            problem: problem.into(),
            technology: technology.into(),
            business_model: business_model.into(),
            format: None,
            channel: None,
            action_verb: None,
            trend: None,
        }
    }

    /// Fill an optional slot.
    pub fn with_optional(mut self, category: OptionalCategory, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match category {
            OptionalCategory::Format => self.format = value,
            OptionalCategory::Channel => self.channel = value,
            OptionalCategory::ActionVerb => self.action_verb = value,
            OptionalCategory::Trend => self.trend = value,
        }
        self
    }

    /// Value selected for the given element type, if any.
    pub fn get(&self, element_type: ElementType) -> Option<&str> {
        match element_type {
            ElementType::Persona => Some(&self.persona),
            ElementType::Problem => Some(&self.problem),
            ElementType::Technology => Some(&self.technology),
            ElementType::BusinessModel => Some(&self.business_model),
            ElementType::Format => self.format.as_deref(),
            ElementType::Channel => self.channel.as_deref(),
            ElementType::ActionVerb => self.action_verb.as_deref(),
            ElementType::Trend => self.trend.as_deref(),
        }
    }

    /// Element types with a selected value, in category order.
    pub fn element_types(&self) -> Vec<ElementType> {
        ElementType::CORE
            .into_iter()
            .chain(OptionalCategory::ALL.iter().map(|c| c.element_type()))
            .filter(|t| self.get(*t).is_some())
            .collect()
    }
}

// =============================================================================
// Ideas
// =============================================================================

/// A generated idea as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaContent {
    pub persona: String,
    pub problem: String,
    pub technology: String,
    pub business_model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// ISO 8601 timestamp of generation.
    pub generated_at: String,
    pub description: String,
}

impl IdeaContent {
    /// Assemble the client-facing record from a selection.
    pub fn from_selection(
        selection: Selection,
        description: String,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            persona: selection.persona,
            problem: selection.problem,
            technology: selection.technology,
            business_model: selection.business_model,
            format: selection.format,
            generated_at: iso_timestamp(generated_at),
            description,
        }
    }
}

/// A saved idea owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: Uuid,
    pub user_id: String,
    pub content: IdeaContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Idea {
    /// Create a new idea record for the user.
    pub fn new(user_id: impl Into<String>, content: IdeaContent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Active element counts per element type.
pub type ElementCounts = BTreeMap<ElementType, usize>;

/// Format an instant as ISO 8601 with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_element_type_round_trips_storage_names() {
        for element_type in ElementType::ALL {
            let parsed: ElementType = element_type.as_str().parse().unwrap();
            assert_eq!(parsed, element_type);
        }
        assert_eq!(
            "business_model".parse::<ElementType>(),
            Ok(ElementType::BusinessModel)
        );
        let err = "businessModel".parse::<ElementType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown element type: businessModel");
    }

    #[test]
    fn test_element_type_serializes_snake_case() {
        let json = serde_json::to_string(&ElementType::ActionVerb).unwrap();
        assert_eq!(json, "\"action_verb\"");
    }

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert!(config.include_formats);
        assert!(!config.include_channels);
        assert!(config.include_action_verbs);
        assert!(config.include_trends);
    }

    #[test]
    fn test_merge_only_touches_overridden_fields() {
        let overrides = GenerationConfigOverrides {
            include_channels: Some(true),
            include_trends: Some(false),
            ..Default::default()
        };
        let merged = GenerationConfig::default().merged(&overrides);
        assert!(merged.include_formats);
        assert!(merged.include_channels);
        assert!(merged.include_action_verbs);
        assert!(!merged.include_trends);
    }

    #[test]
    fn test_partial_config_json_uses_defaults() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{"includeFormats": false}"#).unwrap();
        assert!(!config.include_formats);
        assert!(config.include_action_verbs);
        assert!(!config.include_channels);
    }

    #[test]
    fn test_idea_content_json_shape() {
        let at = Utc.with_ymd_and_hms(2023, 12, 1, 10, 0, 0).unwrap();
        let selection = Selection::new("Persona", "Problem", "Tech", "Model");
        let content = IdeaContent::from_selection(selection, "Desc.".to_string(), at);

        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["businessModel"], "Model");
        assert_eq!(json["generatedAt"], "2023-12-01T10:00:00.000Z");
        assert!(json.get("format").is_none());
        assert!(json.get("business_model").is_none());
    }

    #[test]
    fn test_selection_tracks_only_filled_slots() {
        let selection = Selection::new("a", "b", "c", "d")
            .with_optional(OptionalCategory::Channel, "podcasts");
        assert_eq!(selection.get(ElementType::Channel), Some("podcasts"));
        assert_eq!(selection.get(ElementType::Format), None);
        assert_eq!(
            selection.element_types(),
            vec![
                ElementType::Persona,
                ElementType::Problem,
                ElementType::Technology,
                ElementType::BusinessModel,
                ElementType::Channel,
            ]
        );
    }

    #[test]
    fn test_element_serializes_type_field() {
        let element = GenerationElement::new(ElementType::Trend, "sustainability");
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "trend");
        assert_eq!(json["active"], true);
    }
}
