// LLM prompt constants for the Recommendations module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ARRAY_ONLY;
use crate::recommendations::models::Profile;

/// Recommendation prompt template.
/// Replace: {json_only}, {interests}, {performance}, {career_aspirations},
///          {skill_building_needs}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"As an AI learning assistant, analyze this student profile and provide 6 specific recommendations:
3 for academic courses or resources, and 3 for extracurricular activities.
{json_only}
The array must contain exactly 6 objects, each containing "title", "type", "description", and "link".
Use "Academic" as the type of the first 3 objects and "Extracurricular" as the type of the last 3.

Important Rules for Links:
1. For academic resources, use Google search links in this format:
   "https://www.google.com/search?q=[TOPIC]+online+course+site:coursera.org+OR+site:edx.org+OR+site:khanacademy.org"
2. For extracurricular activities, use Google search links in this format:
   "https://www.google.com/search?q=[TOPIC]+workshop+OR+event+OR+volunteer"
3. Replace [TOPIC] with relevant keywords from the recommendation title
4. NEVER include direct course links (they may expire)

Student Profile:
Interests: {interests}
Academic Performance: {performance}
Career Aspirations: {career_aspirations}
Skill-building Needs: {skill_building_needs}

Example format:
[
  {
    "title": "Cybersecurity Fundamentals",
    "type": "Academic",
    "description": "Learn essential cybersecurity concepts and practices",
    "link": "https://www.google.com/search?q=Cybersecurity+Fundamentals+online+course+site:coursera.org+OR+site:edx.org+OR+site:khanacademy.org"
  },
  {
    "title": "Coding Bootcamps",
    "type": "Extracurricular",
    "description": "Find intensive programming workshops in your area",
    "link": "https://www.google.com/search?q=Coding+Bootcamps+workshop+OR+event+OR+volunteer"
  }
]"#;

/// Fills the template with the profile. Fields go in verbatim.
pub fn build_prompt(profile: &Profile) -> String {
    fill_template(
        RECOMMENDATION_PROMPT_TEMPLATE,
        &[
            ("{json_only}", JSON_ARRAY_ONLY),
            ("{interests}", &profile.interests),
            ("{performance}", &profile.performance),
            ("{career_aspirations}", &profile.career_aspirations),
            ("{skill_building_needs}", &profile.skill_building_needs),
        ],
    )
}

/// Substitutes placeholders in a single left-to-right pass.
/// Inserted values are never rescanned, so user text containing `{...}` stays as written.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match values.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
