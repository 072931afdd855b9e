//! Splits a free-text model reply into the four profile sections.
//!
//! Each section is extracted on its own by running an ordered list of
//! strategies over the text. The first strategy whose result reaches the
//! section's minimum length wins; failing that, the first non-empty result
//! is kept, and an empty result falls back to a fixed filler sentence.

mod headers;
mod line_scan;

use shared::models::GeneratedProfile;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Backstory,
    PersonalityTraits,
    DialogueStyle,
    SampleDialogue,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Backstory,
        Section::PersonalityTraits,
        Section::DialogueStyle,
        Section::SampleDialogue,
    ];

    /// Position of the section in the prompt, starting at 1.
    pub fn number(self) -> u32 {
        match self {
            Section::Backstory => 1,
            Section::PersonalityTraits => 2,
            Section::DialogueStyle => 3,
            Section::SampleDialogue => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Backstory => "BACKSTORY",
            Section::PersonalityTraits => "PERSONALITY TRAITS",
            Section::DialogueStyle => "DIALOGUE STYLE",
            Section::SampleDialogue => "SAMPLE DIALOGUE",
        }
    }

    /// Shortest trimmed capture accepted without trying the next strategy.
    pub fn min_len(self) -> usize {
        match self {
            Section::Backstory => 50,
            Section::PersonalityTraits | Section::DialogueStyle => 30,
            Section::SampleDialogue => 20,
        }
    }

    pub fn fallback(self) -> &'static str {
        match self {
            Section::Backstory => {
                "Unable to generate backstory. Please try again with different character details."
            }
            Section::PersonalityTraits => {
                "Unable to generate personality traits. Please try again with different character details."
            }
            Section::DialogueStyle => {
                "Unable to generate dialogue style. Please try again with different character details."
            }
            Section::SampleDialogue => {
                "Unable to generate sample dialogue. Please try again with different character details."
            }
        }
    }

    fn index(self) -> usize {
        self.number() as usize - 1
    }

    // Title as a regex fragment; words may be split by any run of blanks.
    fn title_pattern(self) -> &'static str {
        match self {
            Section::Backstory => r"BACKSTORY",
            Section::PersonalityTraits => r"PERSONALITY[ \t]+TRAITS?",
            Section::DialogueStyle => r"DIALOGUE[ \t]+STYLE",
            Section::SampleDialogue => r"SAMPLE[ \t]+DIALOGUE",
        }
    }

    /// Lowercase keyword the line scan looks for.
    fn keyword(self) -> &'static str {
        match self {
            Section::Backstory => "backstory",
            Section::PersonalityTraits => "personality",
            Section::DialogueStyle => "dialogue style",
            Section::SampleDialogue => "sample dialogue",
        }
    }

    fn others(self) -> impl Iterator<Item = Section> {
        Section::ALL.into_iter().filter(move |other| *other != self)
    }
}

type Strategy = fn(&str, Section) -> String;

const STRATEGIES: [(&str, Strategy); 3] = [
    ("strict header", headers::strict_header),
    ("relaxed header", headers::relaxed_header),
    ("line scan", line_scan::line_scan),
];

/// Parse a model reply into a profile whose fields are never empty.
pub fn parse_profile(raw: &str) -> GeneratedProfile {
    let text = raw.replace("\r\n", "\n");
    GeneratedProfile {
        backstory: extract_section(&text, Section::Backstory),
        personality_traits: extract_section(&text, Section::PersonalityTraits),
        dialogue_style: extract_section(&text, Section::DialogueStyle),
        sample_dialogue: extract_section(&text, Section::SampleDialogue),
    }
}

fn extract_section(text: &str, section: Section) -> String {
    let mut first_non_empty: Option<String> = None;

    for (name, strategy) in STRATEGIES {
        let candidate = strategy(text, section);
        if candidate.chars().count() >= section.min_len() {
            trace!(?section, strategy = name, "section extracted");
            return candidate;
        }
        if first_non_empty.is_none() && !candidate.is_empty() {
            trace!(?section, strategy = name, len = candidate.len(), "short candidate kept");
            first_non_empty = Some(candidate);
        }
    }

    first_non_empty.unwrap_or_else(|| {
        debug!(?section, "no content found, using filler text");
        section.fallback().to_string()
    })
}
