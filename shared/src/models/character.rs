use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attributes the caller supplies for a new character.
///
/// Every field is free text and is interpolated into the prompt as-is.
/// Fields missing from the JSON body, or `null`, are treated as empty
/// strings; numbers and booleans are taken in their JSON spelling.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterRequest {
    #[serde(deserialize_with = "scalar_text")]
    pub name: String,
    #[serde(deserialize_with = "scalar_text")]
    pub age: String,
    #[serde(deserialize_with = "scalar_text")]
    pub occupation: String,
    #[serde(deserialize_with = "scalar_text")]
    pub personality_type: String,
    #[serde(deserialize_with = "scalar_text")]
    pub goal: String,
    #[serde(deserialize_with = "scalar_text")]
    pub flaw: String,
    #[serde(deserialize_with = "scalar_text")]
    pub setting: String,
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarText;

    impl Visitor<'_> for ScalarText {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number, boolean or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(ScalarText)
}

/// The four display sections extracted from a model reply.
///
/// A profile returned by the backend never holds an empty field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProfile {
    pub backstory: String,
    pub personality_traits: String,
    pub dialogue_style: String,
    pub sample_dialogue: String,
}
