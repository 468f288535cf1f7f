use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Era, Genre, Preferences};

/// Similarity guidance, one fragment per band. Levels 1 and 2 share the
/// loose band.
const GUIDANCE_LOOSE: &str = "Feel free to explore widely — recommend books that share loose thematic or tonal qualities but may be quite different in style, setting, or genre.";
const GUIDANCE_BALANCED: &str =
    "Recommend books that share notable thematic, stylistic, or tonal qualities with the input book.";
const GUIDANCE_CLOSE: &str = "Stick closely to the input book's themes, style, and tone. Recommendations should feel like natural next reads for fans of this specific book.";
const GUIDANCE_TIGHT: &str = "Recommend books that are very tightly similar to the input book — same genre, similar themes, comparable writing style. Fans should feel the recommendations are nearly identical in spirit.";

const ERA_RECENT: &str = "Only recommend books published within the last 30 years.";
const ERA_CLASSIC: &str = "Only recommend books published more than 30 years ago.";
const GENRE_FICTION: &str = "Only recommend fiction books.";
const GENRE_NONFICTION: &str = "Only recommend nonfiction books.";

const CLOSING: &str = "Focus on well-regarded books. Do not re-suggest the input book itself.";
const CLOSING_DIVERSE: &str = "Focus on well-regarded books across different eras and subgenres. Do not re-suggest the input book itself.";

lazy_static! {
    /// Whitespace runs inside a submitted title collapse to single spaces.
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Builds the generation instruction for one request. Deterministic and
/// total: the same title and preferences always produce the same string,
/// and no input can make it fail.
pub fn build_instruction(source_book: &str, preferences: &Preferences) -> String {
    let title = normalize_title(source_book);

    let era_constraint = match preferences.era {
        Era::Recent => ERA_RECENT,
        Era::Classic => ERA_CLASSIC,
        Era::Any => "",
    };

    let genre_constraint = match preferences.genre {
        Genre::Fiction => GENRE_FICTION,
        Genre::Nonfiction => GENRE_NONFICTION,
        Genre::Any => "",
    };

    let constraints = [era_constraint, genre_constraint]
        .iter()
        .filter(|constraint| !constraint.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let lines = [
        format!(r#"You are an expert book recommender. The user loved reading "{title}"."#),
        "Suggest 6 books they would likely enjoy next.".to_string(),
        similarity_guidance(preferences.similarity).to_string(),
        constraints,
        closing(preferences.similarity).to_string(),
    ];

    lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Maps a similarity level to its guidance fragment. Levels above 5 never
/// reach this point in practice; the match is still total.
fn similarity_guidance(similarity: u8) -> &'static str {
    match similarity {
        0..=2 => GUIDANCE_LOOSE,
        3 => GUIDANCE_BALANCED,
        4 => GUIDANCE_CLOSE,
        _ => GUIDANCE_TIGHT,
    }
}

/// Low similarity asks for a spread across eras and subgenres; the
/// no-re-suggest instruction is always present.
fn closing(similarity: u8) -> &'static str {
    if similarity <= 2 {
        CLOSING_DIVERSE
    } else {
        CLOSING
    }
}

fn normalize_title(source_book: &str) -> String {
    WHITESPACE
        .replace_all(source_book.trim(), " ")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preferences(era: Era, genre: Genre, similarity: u8) -> Preferences {
        Preferences {
            era,
            genre,
            similarity,
        }
    }

    #[test]
    fn each_similarity_level_selects_exactly_one_guidance_fragment() {
        let fragments = [
            GUIDANCE_LOOSE,
            GUIDANCE_BALANCED,
            GUIDANCE_CLOSE,
            GUIDANCE_TIGHT,
        ];

        for similarity in 1..=5u8 {
            let instruction =
                build_instruction("Dune", &preferences(Era::Any, Genre::Any, similarity));
            let present = fragments
                .iter()
                .filter(|fragment| instruction.contains(*fragment))
                .count();
            assert_eq!(present, 1, "similarity {similarity} selected {present} fragments");
        }
    }

    #[test]
    fn levels_one_and_two_share_the_loose_fragment() {
        let low = build_instruction("Dune", &preferences(Era::Any, Genre::Any, 1));
        let two = build_instruction("Dune", &preferences(Era::Any, Genre::Any, 2));

        assert!(low.contains(GUIDANCE_LOOSE));
        assert!(two.contains(GUIDANCE_LOOSE));
    }

    #[test]
    fn era_any_adds_no_era_clause() {
        let instruction = build_instruction("Dune", &preferences(Era::Any, Genre::Any, 3));

        assert!(!instruction.contains(ERA_RECENT));
        assert!(!instruction.contains(ERA_CLASSIC));
    }

    #[test]
    fn era_clauses_are_mutually_exclusive() {
        let recent = build_instruction("Dune", &preferences(Era::Recent, Genre::Any, 3));
        assert!(recent.contains(ERA_RECENT));
        assert!(!recent.contains(ERA_CLASSIC));

        let classic = build_instruction("Dune", &preferences(Era::Classic, Genre::Any, 3));
        assert!(classic.contains(ERA_CLASSIC));
        assert!(!classic.contains(ERA_RECENT));
    }

    #[test]
    fn genre_clause_tracks_the_preference() {
        let fiction = build_instruction("Dune", &preferences(Era::Any, Genre::Fiction, 3));
        assert!(fiction.contains(GENRE_FICTION));
        assert!(!fiction.contains(GENRE_NONFICTION));

        let nonfiction = build_instruction("Dune", &preferences(Era::Any, Genre::Nonfiction, 3));
        assert!(nonfiction.contains(GENRE_NONFICTION));

        let any = build_instruction("Dune", &preferences(Era::Any, Genre::Any, 3));
        assert!(!any.contains(GENRE_FICTION));
        assert!(!any.contains(GENRE_NONFICTION));
    }

    #[test]
    fn era_and_genre_clauses_share_one_line() {
        let instruction =
            build_instruction("1984", &preferences(Era::Classic, Genre::Fiction, 5));

        assert!(instruction.contains(&format!("{ERA_CLASSIC} {GENRE_FICTION}")));
    }

    #[test]
    fn builder_is_deterministic() {
        let prefs = preferences(Era::Recent, Genre::Nonfiction, 4);

        assert_eq!(
            build_instruction("Sapiens", &prefs),
            build_instruction("Sapiens", &prefs)
        );
    }

    #[test]
    fn default_request_for_dune_mentions_the_balanced_fragment_only() {
        let instruction = build_instruction("Dune", &Preferences::default());

        assert!(instruction.contains(r#"The user loved reading "Dune"."#));
        assert!(instruction.contains("Suggest 6 books"));
        assert!(instruction.contains(GUIDANCE_BALANCED));
        assert!(!instruction.contains("Only recommend"));
        assert!(instruction.contains("Do not re-suggest the input book itself."));
    }

    #[test]
    fn classic_fiction_at_level_five_includes_all_three_clauses() {
        let instruction =
            build_instruction("1984", &preferences(Era::Classic, Genre::Fiction, 5));

        assert!(instruction.contains(GUIDANCE_TIGHT));
        assert!(instruction.contains(ERA_CLASSIC));
        assert!(instruction.contains(GENRE_FICTION));
    }

    #[test]
    fn low_similarity_widens_the_closing_line() {
        let wide = build_instruction("Dune", &preferences(Era::Any, Genre::Any, 1));
        assert!(wide.contains("across different eras and subgenres"));

        let tight = build_instruction("Dune", &preferences(Era::Any, Genre::Any, 5));
        assert!(!tight.contains("across different eras and subgenres"));
    }

    #[test]
    fn titles_are_trimmed_and_inner_whitespace_collapsed() {
        let instruction =
            build_instruction("  The   Great\tGatsby ", &Preferences::default());

        assert!(instruction.contains(r#""The Great Gatsby""#));
    }

    #[test]
    fn no_blank_lines_when_constraints_are_absent() {
        let instruction = build_instruction("Dune", &Preferences::default());

        assert!(!instruction.contains("\n\n"));
    }
}
