pub mod content;
pub mod responses;

pub use responses::select_response;

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Answer {
    pub text: String,
    pub tip: String,
}
impl Answer {
    pub fn new(text: impl Into<String>, tip: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tip: tip.into(),
        }
    }
}

/// A reply as it sits in the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAnswer {
    pub text: &'static str,
    pub tip: &'static str,
}
impl StaticAnswer {
    pub fn to_answer(&self) -> Answer {
        Answer::new(self.text, self.tip)
    }
}

/// Keywords sharing a pool of candidate replies. Groups are tried in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct PatternGroup {
    pub patterns: &'static [&'static str],
    pub answers: &'static [StaticAnswer],
}
impl PatternGroup {
    /// Plain substring containment, not word matching: "good" matches "goodbye".
    pub fn matches(&self, input: &str) -> bool {
        self.patterns.iter().any(|p| input.contains(p))
    }
}
