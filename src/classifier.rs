//! Pure field classifiers for raw roster records.

use serde_json::Value;

use crate::error::{FacultyGeoError, Result};
use crate::types::Rank;

type RulePredicate = fn(&str) -> bool;

const QUALIFIED_PROFESSOR: [&str; 5] = [
    "Associate Professor",
    "AssociateProfessor",
    "Assistant Professor",
    "AssistantProfessor",
    "Distinguished Professor",
];

/// Rank rules in precedence order; the first matching predicate wins.
pub const RANK_RULES: [(RulePredicate, Rank); 6] = [
    (is_director, Rank::Director),
    (is_distinguished_professor, Rank::DistinguishedProfessor),
    (is_plain_professor, Rank::Professor),
    (is_associate_professor, Rank::AssociateProfessor),
    (is_assistant_professor, Rank::AssistantProfessor),
    (is_lecturer, Rank::Lecturer),
];

fn is_director(title: &str) -> bool {
    title.contains("Dean") || title.contains("Chair") || title.contains("Director")
}

fn is_distinguished_professor(title: &str) -> bool {
    title.contains("Distinguished Professor") || title.contains("DistinguishedProfessor")
}

// "DistinguishedProfessor" is already claimed by the rule above.
fn is_plain_professor(title: &str) -> bool {
    title.contains("Professor") && !QUALIFIED_PROFESSOR.iter().any(|q| title.contains(q))
}

fn is_associate_professor(title: &str) -> bool {
    title.contains("Associate Professor") || title.contains("AssociateProfessor")
}

fn is_assistant_professor(title: &str) -> bool {
    title.contains("Assistant Professor") || title.contains("AssistantProfessor")
}

fn is_lecturer(title: &str) -> bool {
    title.contains("Lecturer")
}

/// Unicode whitespace plus the ASCII separators U+001C..U+001F, which
/// `str::trim` keeps.
fn is_name_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub fn person_name(raw: &str) -> String {
    raw.trim_matches(is_name_padding).to_string()
}

/// Extract the university name from the JSON affiliation payload.
pub fn institution_name(raw: &str, line: u64) -> Result<String> {
    let payload: Value = serde_json::from_str(raw)
        .map_err(|source| FacultyGeoError::MalformedAffiliation { line, source })?;

    payload
        .get("name")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or(FacultyGeoError::MissingInstitutionName { line })
}

/// Map a free-text title to a rank. Returns `None` for an empty title,
/// which callers treat as "skip this record".
pub fn classify_rank(title: &str) -> Option<Rank> {
    if title.is_empty() {
        return None;
    }

    let rank = RANK_RULES
        .iter()
        .find(|(matches, _)| matches(title))
        .map(|(_, rank)| *rank)
        .unwrap_or(Rank::Other);
    Some(rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_name_trims_whitespace() {
        assert_eq!(person_name("  Jane Doe  "), "Jane Doe");
        assert_eq!(person_name("\tJohn\n"), "John");
        assert_eq!(person_name("   "), "");
    }

    #[test]
    fn test_person_name_trims_separator_controls() {
        assert_eq!(person_name("\x1cJane Doe\x1f"), "Jane Doe");
        assert_eq!(person_name("\u{3000}Jane\x1d Doe\u{a0}"), "Jane\x1d Doe");
    }

    #[test]
    fn test_institution_name_from_payload() {
        let payload = json!({"name": "State U", "dept": "CS"}).to_string();
        assert_eq!(institution_name(&payload, 2).unwrap(), "State U");
    }

    #[test]
    fn test_institution_name_is_not_normalized() {
        let payload = json!({"name": " State U "}).to_string();
        assert_eq!(institution_name(&payload, 2).unwrap(), " State U ");
    }

    #[test]
    fn test_institution_name_malformed_payload() {
        let err = institution_name("{name: State U", 7).unwrap_err();
        assert!(matches!(err, FacultyGeoError::MalformedAffiliation { line: 7, .. }));
    }

    #[test]
    fn test_institution_name_missing_key() {
        let payload = json!({"title": "State U"}).to_string();
        let err = institution_name(&payload, 3).unwrap_err();
        assert!(matches!(err, FacultyGeoError::MissingInstitutionName { line: 3 }));

        let err = institution_name("[1, 2]", 4).unwrap_err();
        assert!(matches!(err, FacultyGeoError::MissingInstitutionName { line: 4 }));
    }

    #[test]
    fn test_empty_title_is_skipped() {
        assert_eq!(classify_rank(""), None);
    }

    #[test]
    fn test_whitespace_title_is_other() {
        assert_eq!(classify_rank(" "), Some(Rank::Other));
    }

    #[test]
    fn test_director_keywords_win() {
        for title in [
            "Dean",
            "Associate Dean and Professor",
            "Department Chair",
            "Professor and Chair",
            "Director of Graduate Studies, Assistant Professor",
            "Distinguished Professor; Director",
        ] {
            assert_eq!(classify_rank(title), Some(Rank::Director), "{title}");
        }
    }

    #[test]
    fn test_plain_professor() {
        assert_eq!(classify_rank("Professor"), Some(Rank::Professor));
        assert_eq!(classify_rank("XProfessor"), Some(Rank::Professor));
        assert_eq!(classify_rank("Professor of Computer Science"), Some(Rank::Professor));
        assert_eq!(classify_rank("Research Professor"), Some(Rank::Professor));
    }

    #[test]
    fn test_qualified_professor_never_plain() {
        let cases = [
            ("Associate", Rank::AssociateProfessor),
            ("Assistant", Rank::AssistantProfessor),
            ("Distinguished", Rank::DistinguishedProfessor),
        ];
        for (qualifier, expected) in cases {
            let spaced = format!("{qualifier} Professor");
            let joined = format!("{qualifier}Professor");
            assert_eq!(classify_rank(&spaced), Some(expected), "{spaced}");
            assert_eq!(classify_rank(&joined), Some(expected), "{joined}");
        }
    }

    #[test]
    fn test_lecturer_and_other() {
        assert_eq!(classify_rank("Senior Lecturer"), Some(Rank::Lecturer));
        assert_eq!(classify_rank("Teaching Faculty"), Some(Rank::Other));
        assert_eq!(classify_rank("professor"), Some(Rank::Other));
    }

    #[test]
    fn test_each_rule_matches_its_own_keyword() {
        let keywords = [
            "Chair",
            "Distinguished Professor",
            "Professor",
            "Associate Professor",
            "Assistant Professor",
            "Lecturer",
        ];
        for ((matches, rank), keyword) in RANK_RULES.iter().zip(keywords) {
            assert!(matches(keyword), "rule for {rank} should match {keyword}");
            assert_eq!(classify_rank(keyword), Some(*rank));
        }
    }
}
