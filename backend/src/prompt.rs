use crate::segmenter::Section;
use shared::models::CharacterRequest;

pub const SYSTEM_PROMPT: &str = "You are a creative writing assistant. Generate detailed character profiles with substantial content for each section. Write in a natural, engaging style. Do not repeat instructions or return placeholder text.";

/// Render the user prompt for a character request.
///
/// Section headers are taken from [`Section`], so the strict header tier of
/// the segmenter matches what the model was asked to write.
pub fn build_prompt(request: &CharacterRequest) -> String {
    let CharacterRequest {
        name,
        age,
        occupation,
        personality_type,
        goal,
        flaw,
        setting,
    } = request;

    let mut prompt = String::new();
    prompt.push_str("Create a detailed character for a story with these details:\n\n");
    prompt.push_str(&format!("Name: {name}\n"));
    prompt.push_str(&format!("Age: {age}\n"));
    prompt.push_str(&format!("Occupation: {occupation}\n"));
    prompt.push_str(&format!("Personality Type: {personality_type}\n"));
    prompt.push_str(&format!("Goal: {goal}\n"));
    prompt.push_str(&format!("Flaw: {flaw}\n"));
    prompt.push_str(&format!("Setting: {setting}\n\n"));

    prompt.push_str("Write a complete character profile with exactly these 4 sections:\n\n");

    for section in Section::ALL {
        prompt.push_str(&format!("{}. {}\n", section.number(), section.title()));
        prompt.push_str(&instruction(section, name, setting));
        prompt.push_str("\n\n");
    }

    prompt.push_str(&format!(
        "Make {name} feel like a real, three-dimensional person that readers will care about."
    ));
    prompt
}

fn instruction(section: Section, name: &str, setting: &str) -> String {
    match section {
        Section::Backstory => format!(
            "Write 2-3 detailed paragraphs about {name}'s life story. Include their childhood, key events that shaped them, important relationships, and how they became who they are today. Make it specific to their age, occupation, and the {setting} setting."
        ),
        Section::PersonalityTraits => format!(
            "Describe {name}'s personality in detail. Include their strengths, weaknesses, quirks, habits, fears, and how they interact with others. Be specific about what makes them unique and memorable."
        ),
        Section::DialogueStyle => format!(
            "Explain how {name} speaks. Describe their vocabulary level, tone, speech patterns, favorite phrases, and communication style. Consider their occupation, age, and personality type."
        ),
        Section::SampleDialogue => format!(
            "Write 3-4 lines of dialogue that {name} would actually say. Show their personality and speaking style in a typical conversation or situation relevant to their goal or setting."
        ),
    }
}
