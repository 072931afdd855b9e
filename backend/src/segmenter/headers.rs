use super::Section;
use regex::Regex;
use std::sync::LazyLock;

// Markdown decoration models like to wrap headers in: `## 1. Backstory`,
// `**BACKSTORY:**`, `__Backstory__`.
const LEAD: &str = r"^[ \t#*_]*";
const TRAIL: &str = r"[ \t*_]*:?[ \t*_]*$";

struct HeaderPatterns {
    /// `N. TITLE`, indexed by `Section::index`.
    strict: Vec<Regex>,
    /// `TITLE` with an optional `N.` or `N)` prefix.
    relaxed: Vec<Regex>,
}

static PATTERNS: LazyLock<HeaderPatterns> = LazyLock::new(|| HeaderPatterns {
    strict: Section::ALL
        .into_iter()
        .map(|section| {
            compile(&format!(
                r"(?im){LEAD}{}\.[ \t*_]*{}{TRAIL}",
                section.number(),
                section.title_pattern()
            ))
        })
        .collect(),
    relaxed: Section::ALL
        .into_iter()
        .map(|section| {
            compile(&format!(
                r"(?im){LEAD}(?:\d+[.)][ \t*_]*)?{}{TRAIL}",
                section.title_pattern()
            ))
        })
        .collect(),
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("section header pattern must compile")
}

/// Body under the section's numbered header, e.g. `2. PERSONALITY TRAITS`.
pub(super) fn strict_header(text: &str, section: Section) -> String {
    capture_after(&PATTERNS.strict[section.index()], text, section)
}

/// Body under a header that names the section, numbered or not.
pub(super) fn relaxed_header(text: &str, section: Section) -> String {
    capture_after(&PATTERNS.relaxed[section.index()], text, section)
}

/// The section a single line is a header for, numbered or not.
pub(super) fn header_section(line: &str) -> Option<Section> {
    Section::ALL
        .into_iter()
        .find(|section| PATTERNS.relaxed[section.index()].is_match(line))
}

/// Text between the end of the first `header` match and the start of the
/// next header line belonging to any other section.
fn capture_after(header: &Regex, text: &str, section: Section) -> String {
    let Some(found) = header.find(text) else {
        return String::new();
    };
    let body_start = found.end();
    let body_end = section
        .others()
        .filter_map(|other| PATTERNS.relaxed[other.index()].find_at(text, body_start))
        .map(|next| next.start())
        .min()
        .unwrap_or(text.len());
    text[body_start..body_end].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_requires_the_section_number() {
        let text = "BACKSTORY\nRaised on a barge.";
        assert_eq!(strict_header(text, Section::Backstory), "");
        assert_eq!(relaxed_header(text, Section::Backstory), "Raised on a barge.");

        let wrong_number = "3. BACKSTORY\nRaised on a barge.";
        assert_eq!(strict_header(wrong_number, Section::Backstory), "");
    }

    #[test]
    fn colon_and_plural_variants() {
        let text = "2. Personality Trait:\nGentle.\n3) Dialogue   Style:\nSoft.";
        assert_eq!(strict_header(text, Section::PersonalityTraits), "Gentle.");
        assert_eq!(relaxed_header(text, Section::DialogueStyle), "Soft.");
    }

    #[test]
    fn capture_stops_before_next_header_line() {
        let text = "1. BACKSTORY\nFirst.\nSecond.\n\nPERSONALITY TRAITS\nLoud.";
        assert_eq!(strict_header(text, Section::Backstory), "First.\nSecond.");
        assert_eq!(
            relaxed_header(text, Section::PersonalityTraits),
            "Loud."
        );
    }

    #[test]
    fn headers_need_a_line_of_their_own() {
        let text = "Her backstory is long and sad.\nMore text.";
        assert_eq!(relaxed_header(text, Section::Backstory), "");
    }

    #[test]
    fn last_section_runs_to_end_of_text() {
        let text = "4. SAMPLE DIALOGUE\n\"One.\"\n\"Two.\"\n";
        assert_eq!(
            strict_header(text, Section::SampleDialogue),
            "\"One.\"\n\"Two.\""
        );
    }

    #[test]
    fn single_line_header_lookup() {
        assert_eq!(header_section("**2. Personality Traits:**"), Some(Section::PersonalityTraits));
        assert_eq!(header_section("SAMPLE DIALOGUE"), Some(Section::SampleDialogue));
        assert_eq!(header_section("Her personality was forged in the slums."), None);
    }

    #[test]
    fn earlier_sections_do_not_bound_later_ones() {
        let text = "4. SAMPLE DIALOGUE\n\"Back off.\"\n1. BACKSTORY\nOrphaned young.";
        assert_eq!(strict_header(text, Section::SampleDialogue), "\"Back off.\"");
        assert_eq!(strict_header(text, Section::Backstory), "Orphaned young.");
    }
}
