use fancy_regex::Regex;
use filter_generator::{
    pattern::DEFAULT_SUFFIX, Error, Generator, GeneratorBuilder, LineKind, Mode, Options,
    OutputDocument, PatternBuilder, VariantTable,
};
use indoc::indoc;

/// Compiles the expressions written into `document`, without their list marker and suffix.
fn compile(document: &OutputDocument) -> Vec<Regex> {
    document
        .lines()
        .iter()
        .filter(|line| line.kind == LineKind::Pattern)
        .map(|line| {
            let pattern = line.text.trim_start().trim_start_matches("- ");
            let expression = pattern.strip_suffix(DEFAULT_SUFFIX).unwrap();
            Regex::new(expression).unwrap()
        })
        .collect()
}

fn regex(word: &str, mode: Mode) -> Regex {
    let table = VariantTable::default();
    Regex::new(&PatternBuilder::new(&table).regex(word, mode)).unwrap()
}

fn matches(regex: &Regex, text: &str) -> bool {
    regex.is_match(text).unwrap()
}

#[test]
fn normal_matches_disguised_word() {
    let sex = regex("sex", Mode::Normal);

    assert!(matches(&sex, "sex"));
    assert!(matches(&sex, "SEX"));
    assert!(matches(&sex, "I said sex."));
    assert!(matches(&sex, "s-e-x"));
    assert!(matches(&sex, "s . e . x"));
    assert!(matches(&sex, "s3x"));
    assert!(matches(&sex, "$3×"));
    assert!(matches(&sex, "ssseeexxx"));
    assert!(matches(&sex, "§csex§r"));
    assert!(matches(&sex, "s§ce§ax"));
}

#[test]
fn normal_ignores_longer_words() {
    let sex = regex("sex", Mode::Normal);

    assert!(!matches(&sex, "Essex"));
    assert!(!matches(&sex, "Sussex"));
    assert!(!matches(&sex, "sextant"));
    assert!(!matches(&sex, "sexy"));
    assert!(!matches(&sex, "4sex"));
    assert!(!matches(&sex, "sex4"));
}

#[test]
fn normal_accented_boundary() {
    let puta = regex("puta", Mode::Normal);

    assert!(matches(&puta, "puta"));
    assert!(matches(&puta, "púta"));
    assert!(!matches(&puta, "disputa"));
    assert!(!matches(&puta, "ñputa"));
    assert!(!matches(&puta, "putañ"));
}

#[test]
fn strong_matches_inside_words() {
    let bitch = regex("bitch", Mode::Strong);

    assert!(matches(&bitch, "bitch"));
    assert!(matches(&bitch, "sonofabitch"));
    assert!(matches(&bitch, "b!7ch"));
    assert!(matches(&bitch, "v1tch"));
    assert!(matches(&bitch, "B.I.T.C.H"));
    assert!(matches(&bitch, "bitch!"));
    assert!(matches(&bitch, "bitch123"));
}

#[test]
fn strong_ignores_continued_words() {
    let bitch = regex("bitch", Mode::Strong);
    let hard = regex("hard", Mode::Strong);

    assert!(!matches(&bitch, "bitches"));
    assert!(!matches(&bitch, "bitchñ"));
    assert!(!matches(&hard, "hardcore"));
    assert!(matches(&hard, "diehard"));
}

#[test]
fn normal_boundary_covers_all_letters() {
    let sex = regex("sex", Mode::Normal);

    for text in [
        "äsex", "Äsex", "çsex", "ësex", "øsex", "ßsex", "e\u{301}sex", "sexä", "sexø", "sexé",
    ] {
        assert!(!matches(&sex, text), "{} should not match", text);
    }
    assert!(matches(&sex, "¿sex?"));
}

#[test]
fn strong_stops_before_any_letter() {
    let bitch = regex("bitch", Mode::Strong);

    for text in ["bitchäs", "bitchës", "bitchøx", "bitchß", "bitch\u{301}"] {
        assert!(!matches(&bitch, text), "{} should not match", text);
    }
    assert!(matches(&bitch, "äbitch"));
}

#[test]
fn full_document() {
    let generator = Generator::default();
    let table = VariantTable::default();
    let builder = PatternBuilder::new(&table);

    let document = generator
        .document(indoc! {"
            # Words for the example server
            Passive
            !Hard

            sex
            !bitch
        "})
        .unwrap();

    assert_eq!(
        document.to_string(),
        format!(
            "filters:\n\n# Passive\n- {}\n# Hard\n- {}\n# sex\n- {}\n# bitch\n- {}\n",
            builder.pattern("passive", Mode::Normal),
            builder.pattern("hard", Mode::Strong),
            builder.pattern("sex", Mode::Normal),
            builder.pattern("bitch", Mode::Strong),
        )
    );
    for line in document.lines() {
        if line.kind == LineKind::Pattern {
            assert_eq!(line.text.matches(DEFAULT_SUFFIX).count(), 1);
            assert!(line.text.ends_with(DEFAULT_SUFFIX));
        }
    }
}

#[test]
fn document_patterns_match() {
    let document = Generator::default().document("sex\n!bitch").unwrap();
    let regexes = compile(&document);

    assert_eq!(regexes.len(), 2);
    assert!(matches(&regexes[0], "s e x"));
    assert!(!matches(&regexes[0], "Essex"));
    assert!(matches(&regexes[1], "sonofabitch"));
}

#[test]
fn order_is_kept() {
    let document = Generator::default()
        .document("zebra\napple\n!mango\nbanana")
        .unwrap();

    let titles = document
        .lines()
        .iter()
        .filter(|line| line.kind == LineKind::Title)
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>();

    assert_eq!(titles, vec!["# zebra", "# apple", "# mango", "# banana"]);
}

#[test]
fn gender_variants() {
    let generator = GeneratorBuilder::new()
        .options(Options::TITLES | Options::GENDER_VARIANTS)
        .build();

    let document = generator.document("puto\n!pene\nPERRO").unwrap();
    let regexes = compile(&document);

    let titles = document
        .lines()
        .iter()
        .filter(|line| line.kind == LineKind::Title)
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        titles,
        vec!["# puto", "# puta", "# pene", "# PERRO", "# PERRA"]
    );
    assert!(matches(&regexes[1], "puta"));
    assert!(!matches(&regexes[1], "puto"));
}

#[test]
fn without_titles() {
    let generator = GeneratorBuilder::new().options(Options::empty()).build();

    let document = generator.document("sex\n!bitch").unwrap();

    assert_eq!(document.lines().len(), 4);
    assert!(document.lines().iter().all(|line| line.kind != LineKind::Title));
}

#[test]
fn empty_input() {
    let generator = Generator::default();

    for text in ["", "\n\n", "# only a comment\n", "!\n   \n"] {
        assert!(matches!(generator.document(text), Err(Error::EmptyInput)));
        let preview = generator.preview(text);
        assert!(preview.is_empty());
        assert_eq!(preview.to_string(), "filters:\n\n");
    }
}

#[test]
fn generation_is_repeatable() {
    let generator = GeneratorBuilder::new()
        .options(Options::TITLES | Options::GENDER_VARIANTS)
        .build();
    let words = "Passive\n!Hard\nsex\n!bitch\nputo";

    assert_eq!(
        generator.document(words).unwrap(),
        generator.document(words).unwrap()
    );
}

#[test]
fn custom_variants() {
    let generator = GeneratorBuilder::new().variant('x', "xks").build();
    let document = generator.document("sex").unwrap();
    let regexes = compile(&document);

    assert!(matches(&regexes[0], "sek"));
    assert!(matches(&regexes[0], "sex"));
}
