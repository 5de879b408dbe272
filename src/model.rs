use serde::{Deserialize, Deserializer, Serialize};

/// A stored recipe. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_instructions")]
    pub instructions: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InstructionsField {
    List(Vec<String>),
    Text(String),
}

/// Accept instructions either as a list or as one sentence-separated string.
///
/// Older seed documents store all steps in a single string; those are split
/// on `.` with empty pieces dropped.
fn deserialize_instructions<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = InstructionsField::deserialize(deserializer)?;
    Ok(match field {
        InstructionsField::List(steps) => steps,
        InstructionsField::Text(text) => text
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    })
}
