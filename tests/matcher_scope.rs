// tests/matcher_scope.rs

use std::error::Error;
use std::path::Path;

use proptest::prelude::*;

use cssdts::config::{PatternSpec, DEFAULT_INCLUDE};
use cssdts::matcher::{PathMatcher, PatternSet};

type TestResult = Result<(), Box<dyn Error>>;

fn matcher(include: &[PatternSpec], ignore: &[PatternSpec]) -> Result<PathMatcher, Box<dyn Error>> {
    Ok(PathMatcher::new(
        "/proj",
        PatternSet::compile(include)?,
        PatternSet::compile(ignore)?,
    ))
}

#[test]
fn default_include_matches_module_css_anywhere() -> TestResult {
    let m = matcher(&[PatternSpec::glob(DEFAULT_INCLUDE)], &[])?;

    assert!(m.is_in_scope(Path::new("/proj/sample.module.css")));
    assert!(m.is_in_scope(Path::new("/proj/src/deep/nested/a.module.css")));
    assert!(m.is_in_scope(Path::new("src/a.module.css")));
    assert!(!m.is_in_scope(Path::new("/proj/src/plain.css")));
    assert!(!m.is_in_scope(Path::new("/proj/src/a.module.scss")));
    Ok(())
}

#[test]
fn ignore_wins_over_include() -> TestResult {
    let m = matcher(
        &[PatternSpec::glob("**/*.styles.css")],
        &[PatternSpec::glob("**/__*")],
    )?;

    assert!(m.is_in_scope(Path::new("/proj/sample.styles.css")));
    assert!(!m.is_in_scope(Path::new("/proj/__sample.styles.css")));
    assert!(!m.is_in_scope(Path::new("/proj/src/__private/a.styles.css")));
    assert!(m.is_excluded(Path::new("/proj/__sample.styles.css")));
    Ok(())
}

#[test]
fn declaration_files_are_never_in_scope() -> TestResult {
    let m = matcher(&[PatternSpec::glob("**/*")], &[])?;

    assert!(m.is_in_scope(Path::new("/proj/a.module.css")));
    assert!(!m.is_in_scope(Path::new("/proj/a.module.css.d.ts")));
    assert!(m.is_excluded(Path::new("/proj/types/a.module.css.d.ts")));

    let regex = matcher(&[PatternSpec::regex(".*")], &[])?;
    assert!(!regex.is_in_scope(Path::new("/proj/a.module.css.d.ts")));
    Ok(())
}

#[test]
fn regex_patterns_match_relative_or_absolute_form() -> TestResult {
    let m = matcher(
        &[PatternSpec::regex(r"\.module\.css$")],
        &[PatternSpec::regex(r"^legacy/")],
    )?;

    assert!(m.is_in_scope(Path::new("/proj/src/a.module.css")));
    assert!(!m.is_in_scope(Path::new("/proj/legacy/a.module.css")));
    assert!(!m.is_in_scope(Path::new("legacy/a.module.css")));

    let abs = matcher(&[PatternSpec::regex(r"^/proj/src/")], &[])?;
    assert!(abs.is_in_scope(Path::new("src/a.css")));
    Ok(())
}

#[test]
fn globs_and_regexes_can_be_mixed() -> TestResult {
    let m = matcher(
        &[
            PatternSpec::glob("src/**/*.module.css"),
            PatternSpec::regex(r"\.theme\.css$"),
        ],
        &[],
    )?;

    assert!(m.is_in_scope(Path::new("/proj/src/a.module.css")));
    assert!(m.is_in_scope(Path::new("/proj/themes/dark.theme.css")));
    assert!(!m.is_in_scope(Path::new("/proj/lib/a.module.css")));
    Ok(())
}

#[test]
fn paths_outside_the_base_match_by_absolute_form() -> TestResult {
    let m = matcher(&[PatternSpec::glob(DEFAULT_INCLUDE)], &[])?;
    assert!(m.is_in_scope(Path::new("/other/place/a.module.css")));
    assert!(!m.is_in_scope(Path::new("/other/place/a.css")));
    Ok(())
}

proptest! {
    #[test]
    fn relative_and_absolute_forms_agree(
        dirs in proptest::collection::vec("[a-z_]{1,6}", 0..3),
        stem in "[a-z_]{1,6}",
        ext in prop_oneof![Just("module.css"), Just("styles.css"), Just("css"), Just("module.css.d.ts")],
    ) {
        let m = matcher(
            &[PatternSpec::glob(DEFAULT_INCLUDE), PatternSpec::glob("**/*.styles.css")],
            &[PatternSpec::glob("**/__*")],
        ).map_err(|e| TestCaseError::fail(e.to_string()))?;

        let mut rel = dirs.join("/");
        if !rel.is_empty() {
            rel.push('/');
        }
        rel.push_str(&format!("{stem}.{ext}"));
        let abs = format!("/proj/{rel}");

        prop_assert_eq!(m.is_in_scope(Path::new(&rel)), m.is_in_scope(Path::new(&abs)));
        if ext.ends_with(".d.ts") {
            prop_assert!(!m.is_in_scope(Path::new(&abs)));
        }
    }
}
