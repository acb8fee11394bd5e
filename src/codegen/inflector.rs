//! Plural/singular name inference for anonymous association ends.
//!
//! Rules are ordered: the first matching rule wins, so the tables below must
//! keep their order. Matching is case-insensitive.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Singular → plural rules.
const PLURAL_RULES: &[(&str, &str)] = &[
    ("(quiz)$", "${1}zes"),
    ("^(ox)$", "${1}en"),
    ("([m|l])ouse$", "${1}ice"),
    ("(matr|vert|ind)ix|ex$", "${1}ices"),
    ("(x|ch|ss|sh)$", "${1}es"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("(hive)$", "${1}s"),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    ("(shea|lea|loa|thie)f$", "${1}ves"),
    ("sis$", "ses"),
    ("([ti])um$", "${1}a"),
    ("(tomat|potat|ech|her|vet)o$", "${1}oes"),
    ("(bu)s$", "${1}ses"),
    ("(alias)$", "${1}es"),
    ("(octop)us$", "${1}i"),
    ("(ax|test)is$", "${1}es"),
    ("(us)$", "${1}es"),
    ("([^s]+)$", "${1}s"),
];

/// Plural → singular rules.
const SINGULAR_RULES: &[(&str, &str)] = &[
    ("(quiz)zes$", "${1}"),
    ("(matr)ices$", "${1}ix"),
    ("(vert|ind)ices$", "${1}ex"),
    ("^(ox)en$", "${1}"),
    ("(alias)es$", "${1}"),
    ("(octop|vir)i$", "${1}us"),
    ("(cris|ax|test)es$", "${1}is"),
    ("(shoe)s$", "${1}"),
    ("(o)es$", "${1}"),
    ("(bus)es$", "${1}"),
    ("([m|l])ice$", "${1}ouse"),
    ("(x|ch|ss|sh)es$", "${1}"),
    ("(m)ovies$", "${1}ovie"),
    ("(s)eries$", "${1}eries"),
    ("([^aeiouy]|qu)ies$", "${1}y"),
    ("([lr])ves$", "${1}f"),
    ("(tive)s$", "${1}"),
    ("(hive)s$", "${1}"),
    ("(li|wi|kni)ves$", "${1}fe"),
    ("(shea|loa|lea|thie)ves$", "${1}f"),
    ("(^analy)ses$", "${1}sis"),
    (
        "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$",
        "${1}${2}sis",
    ),
    ("([ti])a$", "${1}um"),
    ("(n)ews$", "${1}ews"),
    ("(h|bl)ouses$", "${1}ouse"),
    ("(corpse)s$", "${1}"),
    ("(us)es$", "${1}"),
    ("s$", ""),
];

/// Irregular (singular, plural) pairs, checked before the rules.
const IRREGULAR: &[(&str, &str)] = &[
    ("move", "moves"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("sex", "sexes"),
    ("child", "children"),
    ("man", "men"),
    ("tooth", "teeth"),
    ("person", "people"),
];

/// Words whose singular and plural forms are identical.
const UNCOUNTABLE: &[&str] = &[
    "sheep",
    "fish",
    "deer",
    "series",
    "species",
    "money",
    "rice",
    "information",
    "equipment",
];

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("inflection rule is valid")
}

fn compile_rules(rules: &[(&'static str, &'static str)]) -> Vec<Rule> {
    rules
        .iter()
        .map(|&(pattern, replacement)| Rule {
            pattern: compile(pattern),
            replacement,
        })
        .collect()
}

static PLURALS: LazyLock<Vec<Rule>> = LazyLock::new(|| compile_rules(PLURAL_RULES));
static SINGULARS: LazyLock<Vec<Rule>> = LazyLock::new(|| compile_rules(SINGULAR_RULES));

/// Irregular rules keyed by direction: `.0` pluralizes, `.1` singularizes.
static IRREGULARS: LazyLock<(Vec<Rule>, Vec<Rule>)> = LazyLock::new(|| {
    IRREGULAR
        .iter()
        .map(|&(singular, plural)| {
            (
                Rule {
                    pattern: compile(&format!("{singular}$")),
                    replacement: plural,
                },
                Rule {
                    pattern: compile(&format!("{plural}$")),
                    replacement: singular,
                },
            )
        })
        .unzip()
});

/// Inflect `word`: plural form when `revert` is false, singular when true.
pub fn inflect(word: &str, revert: bool) -> String {
    if UNCOUNTABLE.contains(&word.to_lowercase().as_str()) {
        return word.to_string();
    }

    let irregular = if revert {
        &IRREGULARS.1
    } else {
        &IRREGULARS.0
    };
    let rules = if revert { &*SINGULARS } else { &*PLURALS };

    irregular
        .iter()
        .chain(rules.iter())
        .find(|rule| rule.pattern.is_match(word))
        .map(|rule| rule.pattern.replace(word, rule.replacement).into_owned())
        .unwrap_or_else(|| word.to_string())
}

/// Plural form of `word`.
pub fn pluralize(word: &str) -> String {
    inflect(word, false)
}

/// Singular form of `word`.
pub fn singularize(word: &str) -> String {
    inflect(word, true)
}
