use super::{PatternGroup, StaticAnswer};

pub const WELCOME: StaticAnswer = StaticAnswer {
    text: "Hello! Welcome to EnglishFlow.",
    tip: "Dica do Mentor: Tente dizer \"Hello\" ou \"Hi\" para começar a conversa!",
};

// Checked before any pattern group
pub const NAME_MARKERS: [&str; 2] = ["my name is", "i am"];
pub const NAME_TRIGGERS: [&str; 2] = ["my name is", "i am "];
pub const NAME_GREETING_TIP: &str =
    "Dica: Você pode me perguntar 'How is the weather?' (Rau is dâ ué-dhêr?)";

pub fn name_greeting(name: &str) -> String {
    format!("Nice to meet you, {}! How can I help you today?", name)
}

// Order matters: the first matching group wins
pub const PATTERN_GROUPS: &[PatternGroup] = &[
    PatternGroup {
        patterns: &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
        answers: &[
            StaticAnswer {
                text: "Hello! How are you today?",
                tip: "Dica: Responda 'I am fine' (Ái ém fáin) ou 'I am good' (Ái ém gud).",
            },
            StaticAnswer {
                text: "Hi! It's nice to see you. How are you doing?",
                tip: "Dica: Diga 'I am great, thank you' (Ái ém grêit, ténc iú).",
            },
        ],
    },
    PatternGroup {
        patterns: &["how are you", "how you doing", "how about you"],
        answers: &[
            StaticAnswer {
                text: "I am doing great, thanks for asking! And you?",
                tip: "Dica: Responda 'I am fine' (Ái ém fáin) ou 'I am okay' (Ái ém ôu-kêi).",
            },
            StaticAnswer {
                text: "I'm excellent! Ready to practice more? How are you?",
                tip: "Dica: Diga 'I am ready' (Ái ém ré-di) e conte como você está.",
            },
        ],
    },
    PatternGroup {
        patterns: &["i am fine", "i am good", "i am well", "im fine", "im good", "fine", "good"],
        answers: &[
            StaticAnswer {
                text: "That's wonderful! What would you like to talk about today?",
                tip: "Dica: Responda 'I want to talk about food' (Ái uónt tu tólc a-báut fud).",
            },
            StaticAnswer {
                text: "Nice! Do you have any plans for today?",
                tip: "Dica: Responda 'I am studying English' (Ái ém istã-dy-ing ínglish).",
            },
        ],
    },
    PatternGroup {
        patterns: &["weather", "sunny", "rainy", "cold", "hot"],
        answers: &[
            StaticAnswer {
                text: "I see! Do you like this weather?",
                tip: "Dica: Responda 'Yes, I do' (Iés, ái dú) ou 'No, I don't' (Nôu, ái dôunt).",
            },
            StaticAnswer {
                text: "The weather is always a good topic! What's your favorite season?",
                tip: "Dica: Responda 'I like summer' (Ái láic sã-mêr) ou 'I like winter' (Ái láic uín-têr).",
            },
        ],
    },
    PatternGroup {
        patterns: &["food", "hungry", "eat", "dinner", "lunch", "breakfast"],
        answers: &[
            StaticAnswer {
                text: "Yummy! What is your favorite food?",
                tip: "Dica: Responda 'My favorite food is pizza' (Mái fêi-vo-rit fud is pí-tzâ).",
            },
            StaticAnswer {
                text: "I love talking about food! Do you like to cook?",
                tip: "Dica: Responda 'Yes, I like to cook' (Iés, ái láic tu cúc).",
            },
        ],
    },
    PatternGroup {
        patterns: &["travel", "trip", "place", "visit", "country"],
        answers: &[
            StaticAnswer {
                text: "Traveling is so much fun! Where would you like to go?",
                tip: "Dica: Responda 'I want to go to the beach' (Ái uónt tu góu tu dâ bítch).",
            },
            StaticAnswer {
                text: "I love new places! Have you ever been to another country?",
                tip: "Dica: Responda 'Yes, I have' (Iés, ái rév) ou 'No, I haven't' (Nôu, ái rê-vent).",
            },
        ],
    },
    PatternGroup {
        patterns: &["name"],
        answers: &[StaticAnswer {
            text: "My name is EnglishFlow AI. What is your name?",
            tip: "Dica: Responda 'My name is...' (Mái nêim is...) e diga seu nome.",
        }],
    },
    PatternGroup {
        patterns: &["thank", "thanks"],
        answers: &[
            StaticAnswer {
                text: "You are very welcome! What else is on your mind?",
                tip: "Dica: Responda 'I want to speak more' (Ái uónt tu spíc mór).",
            },
            StaticAnswer {
                text: "My pleasure! Are you enjoying our conversation?",
                tip: "Dica: Responda 'Yes, I am' (Iés, ái ém).",
            },
        ],
    },
];

pub const FALLBACK_LEN: usize = 3;

/// Paired by index with [`fallback_suggestions`].
pub const FALLBACK_TIPS: [&str; FALLBACK_LEN] = [
    "Dica: Responda 'How are you?' (Rau ár iú?)",
    "Dica: Responda 'My name is...' (Mái nêim is...)",
    "Dica: Tente dizer 'Hello' (Rêlou) para recomeçar!",
];

pub fn fallback_suggestions(original_text: &str) -> [String; FALLBACK_LEN] {
    [
        format!(
            "I'm not sure I understood \"{}\". Did you mean \"How are you?\"",
            original_text
        ),
        "I didn't catch that. Try saying \"Tell me about food\" or \"What is your name?\""
            .to_string(),
        "Sorry, I'm still learning! You can try asking \"How is the weather?\" or just say \"Hi\"."
            .to_string(),
    ]
}
