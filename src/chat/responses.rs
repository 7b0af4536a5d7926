use rand::seq::SliceRandom;
use rand::Rng;

use super::content::{self, FALLBACK_LEN, FALLBACK_TIPS, PATTERN_GROUPS};
use super::Answer;

/// Picks the bot's reply to a transcript.
///
/// `input` is the transcript already lower-cased by the caller, `original_text`
/// the transcript as heard. The original is only used to echo unmatched input.
pub fn select_response(input: &str, original_text: &str) -> Answer {
    select_response_with(&mut rand::thread_rng(), input, original_text)
}

pub fn select_response_with<R: Rng + ?Sized>(
    rng: &mut R,
    input: &str,
    original_text: &str,
) -> Answer {
    if let Some(name) = extract_name(input) {
        return Answer::new(content::name_greeting(&name), content::NAME_GREETING_TIP);
    }

    for group in PATTERN_GROUPS {
        if group.matches(input) {
            // Groups are never empty, see content tests
            if let Some(answer) = group.answers.choose(rng) {
                return answer.to_answer();
            }
        }
    }

    // Suggestion and tip share the index
    let idx = rng.gen_range(0..FALLBACK_LEN);
    let text = content::fallback_suggestions(original_text)[idx].clone();
    Answer::new(text, FALLBACK_TIPS[idx])
}

/// The capitalised word right after "my name is" / "i am", if there is one.
fn extract_name(input: &str) -> Option<String> {
    if !content::NAME_TRIGGERS.iter().any(|t| input.contains(t)) {
        return None;
    }

    // ASCII lowering keeps byte offsets valid for slicing `input`
    let lowered = input.to_ascii_lowercase();
    let (start, marker) = find_marker(&lowered, 0)?;
    let after = start + marker.len();
    let end = find_marker(&lowered, after)
        .map(|(next, _)| next)
        .unwrap_or(input.len());

    let word = input[after..end].trim().split(' ').next().unwrap_or("");
    let letters = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();

    let mut chars = letters.chars();
    let first = chars.next()?;
    Some(format!("{}{}", first.to_ascii_uppercase(), chars.as_str()))
}

/// Leftmost name marker at or after `from`.
fn find_marker(haystack: &str, from: usize) -> Option<(usize, &'static str)> {
    content::NAME_MARKERS
        .iter()
        .filter_map(|m| haystack[from..].find(m).map(|i| (from + i, *m)))
        .min_by_key(|(i, _)| *i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::PatternGroup;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TRIALS: usize = 200;

    fn group_texts(group: &PatternGroup) -> Vec<&'static str> {
        group.answers.iter().map(|a| a.text).collect()
    }

    fn assert_from_group(answer: &Answer, group: &PatternGroup) {
        let found = group
            .answers
            .iter()
            .find(|a| a.text == answer.text)
            .unwrap_or_else(|| panic!("{:?} is not in {:?}", answer.text, group_texts(group)));
        assert_eq!(found.tip, answer.tip);
    }

    fn reply(original: &str) -> Answer {
        select_response(&original.to_lowercase(), original)
    }

    #[test]
    fn greets_by_name() {
        for input in ["my name is bob", "i am bob", "hello, my name is bob!"] {
            let answer = reply(input);
            assert!(answer.text.contains("Nice to meet you, Bob!"), "{}", input);
            assert_eq!(answer.tip, content::NAME_GREETING_TIP);
        }
    }

    #[test]
    fn name_is_normalised() {
        assert!(reply("My name is BOB").text.contains("Nice to meet you, Bob!"));
        assert!(select_response("my name is bob123", "my name is bob123")
            .text
            .contains("Nice to meet you, Bob!"));
        assert!(select_response("i am BOB", "I am BOB")
            .text
            .contains("Nice to meet you, Bob!"));
    }

    #[test]
    fn name_stops_at_next_marker() {
        let answer = select_response("i am my name is", "I am my name is");
        assert!(!answer.text.starts_with("Nice to meet you"));
    }

    #[test]
    fn name_check_runs_before_groups() {
        // "i am fine" never reaches the fine/good group
        let answer = select_response("i am fine", "I am fine");
        assert_eq!(answer.text, "Nice to meet you, Fine! How can I help you today?");
    }

    #[test]
    fn punctuation_only_name_falls_through() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..TRIALS {
            let answer = select_response_with(&mut rng, "my name is ...", "my name is ...");
            assert!(!answer.text.starts_with("Nice to meet you"));
            // "name" group catches it
            assert_from_group(&answer, &PATTERN_GROUPS[6]);
        }
        let answer = select_response("i am ?!", "i am ?!");
        assert!(!answer.text.starts_with("Nice to meet you"));
    }

    #[test]
    fn hi_scenario() {
        for _ in 0..TRIALS {
            let answer = select_response("hi", "hi");
            let expected = [
                (
                    "Hello! How are you today?",
                    "Dica: Responda 'I am fine' (Ái ém fáin) ou 'I am good' (Ái ém gud).",
                ),
                (
                    "Hi! It's nice to see you. How are you doing?",
                    "Dica: Diga 'I am great, thank you' (Ái ém grêit, ténc iú).",
                ),
            ];
            assert!(expected.contains(&(answer.text.as_str(), answer.tip.as_str())));
        }
    }

    #[test]
    fn each_group_answers_its_own_patterns() {
        let mut rng = StdRng::seed_from_u64(42);
        for (i, group) in PATTERN_GROUPS.iter().enumerate() {
            for pattern in group.patterns {
                if PATTERN_GROUPS[..i].iter().any(|g| g.matches(pattern))
                    || content::NAME_TRIGGERS.iter().any(|t| pattern.contains(t))
                {
                    continue;
                }
                let answer = select_response_with(&mut rng, pattern, pattern);
                assert_from_group(&answer, group);
            }
        }
    }

    #[test]
    fn earlier_group_wins() {
        for _ in 0..TRIALS {
            let answer = select_response(
                "hello, what about the weather",
                "Hello, what about the weather",
            );
            assert_from_group(&answer, &PATTERN_GROUPS[0]);
        }
    }

    #[test]
    fn matches_substrings_not_words() {
        for _ in 0..TRIALS {
            let answer = select_response("goodbye", "Goodbye");
            assert_from_group(&answer, &PATTERN_GROUPS[2]);
        }
    }

    #[test]
    fn single_answer_group_is_exact() {
        let answer = select_response("what's your name", "What's your name");
        assert_eq!(answer.text, "My name is EnglishFlow AI. What is your name?");
    }

    #[test]
    fn fallback_echoes_original_and_pairs_tip() {
        let original = "Xyzzy Plugh";
        let suggestions = content::fallback_suggestions(original);
        let mut seen = [false; FALLBACK_LEN];
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..TRIALS {
            let answer = select_response_with(&mut rng, "xyzzy plugh", original);
            let idx = suggestions
                .iter()
                .position(|s| *s == answer.text)
                .expect("reply is not a fallback suggestion");
            assert_eq!(answer.tip, FALLBACK_TIPS[idx]);
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert!(suggestions[0].contains("\"Xyzzy Plugh\""));
    }

    #[test]
    fn empty_input_falls_back() {
        let answer = select_response("", "");
        assert!(FALLBACK_TIPS.contains(&answer.tip.as_str()));
    }
}
