use super::Section;
use super::headers::header_section;
use regex::Regex;
use std::sync::LazyLock;

// `3. VOICE`, `## 2. CHARACTER TRAITS:`. Upper case only, so numbered
// list items such as `2. Stubborn about money.` are not mistaken for headers.
static NUMBERED_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t#*_]*(\d+)\.[ \t*_]*[A-Z][A-Z \t'&/-]*[A-Z][ \t*_]*:?[ \t*_]*$")
        .expect("numbered header pattern must compile")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    /// `inside_other` is set once a header of another section has been
    /// passed; keyword mentions in that section's body do not open the scan.
    Seeking { inside_other: bool },
    Accumulating,
    Done,
}

/// Collect the lines following the line that opens the section, up to the
/// next header or mention of another section, joined by spaces.
///
/// The scan opens on a header of this section, or on a line mentioning the
/// section keyword before any other section's header has been seen.
pub(super) fn line_scan(text: &str, section: Section) -> String {
    let mut state = ScanState::Seeking {
        inside_other: false,
    };
    let mut collected: Vec<&str> = Vec::new();

    for line in text.lines() {
        state = match state {
            ScanState::Seeking { inside_other } => match heading(line) {
                Some(number) if number == section.number() => ScanState::Accumulating,
                Some(_) => ScanState::Seeking { inside_other: true },
                None if !inside_other && mentions(section, line) => ScanState::Accumulating,
                None => ScanState::Seeking { inside_other },
            },
            ScanState::Accumulating if closes(section, line) => ScanState::Done,
            ScanState::Accumulating => {
                let line = line.trim();
                if !line.is_empty() {
                    collected.push(line);
                }
                ScanState::Accumulating
            }
            ScanState::Done => break,
        };
    }

    collected.join(" ")
}

fn numbered_header(line: &str) -> Option<u32> {
    NUMBERED_HEADER
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
}

/// Section number of a header line: a named section header first, then a
/// bare `N. TITLE` line.
fn heading(line: &str) -> Option<u32> {
    header_section(line)
        .map(Section::number)
        .or_else(|| numbered_header(line))
}

fn mentions(section: Section, line: &str) -> bool {
    line.to_lowercase().contains(section.keyword())
}

fn closes(section: Section, line: &str) -> bool {
    if numbered_header(line).is_some() {
        return true;
    }
    let lower = line.to_lowercase();
    section.others().any(|other| lower.contains(other.keyword()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_between_keyword_and_next_section() {
        let text = "Some preamble.\nAbout her backstory\n  Line one.  \n\nLine two.\nPersonality: bold\nIgnored.";
        assert_eq!(line_scan(text, Section::Backstory), "Line one. Line two.");
    }

    #[test]
    fn opens_on_own_number_with_unknown_title() {
        let text = "1. ORIGINS\nFarm kid.\n2. CHARACTER TRAITS\nCurious, reckless and fiercely loyal to her crew.\n3. VOICE\nQuiet.";
        assert_eq!(
            line_scan(text, Section::PersonalityTraits),
            "Curious, reckless and fiercely loyal to her crew."
        );
        assert_eq!(line_scan(text, Section::Backstory), "Farm kid.");
    }

    #[test]
    fn other_numbers_do_not_open() {
        let text = "1. BACKSTORY\nHello there.";
        assert_eq!(line_scan(text, Section::PersonalityTraits), "");
        assert_eq!(line_scan(text, Section::SampleDialogue), "");
    }

    #[test]
    fn lowercase_numbered_items_are_content() {
        let text = "Personality traits\n1. Brave.\n2. Stubborn.\nDialogue style\nDry.";
        assert_eq!(
            line_scan(text, Section::PersonalityTraits),
            "1. Brave. 2. Stubborn."
        );
    }

    #[test]
    fn stops_scanning_once_done() {
        let text = "Sample dialogue\n\"Hi.\"\n4. END\nBackstory\nSample dialogue again";
        assert_eq!(line_scan(text, Section::SampleDialogue), "\"Hi.\"");
    }

    #[test]
    fn mentions_inside_another_section_do_not_open() {
        let text = "1. BACKSTORY\n\
            Her personality was forged in the slums of the old port.\n\
            She learned to steal before she could read a single word.\n\
            2. PERSONALITY TRAITS\n\
            Brave and stubborn.\n\
            3. DIALOGUE STYLE\n\
            Terse.";
        assert_eq!(line_scan(text, Section::PersonalityTraits), "Brave and stubborn.");
    }

    #[test]
    fn unnumbered_own_header_opens_after_other_sections() {
        let text = "BACKSTORY\nSailor's daughter.\nPERSONALITY TRAITS\nWry and loyal.\nDIALOGUE STYLE\nDry.";
        assert_eq!(line_scan(text, Section::PersonalityTraits), "Wry and loyal.");
    }

    #[test]
    fn numbered_header_recognition() {
        assert_eq!(numbered_header("2. PERSONALITY TRAITS"), Some(2));
        assert_eq!(numbered_header("**3. DIALOGUE STYLE:**"), Some(3));
        assert_eq!(numbered_header("2. Stubborn about money."), None);
        assert_eq!(numbered_header("Chapter 2. BEGIN"), None);
    }
}
