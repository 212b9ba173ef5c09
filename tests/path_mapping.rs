// tests/path_mapping.rs

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use cssdts::config::OutputLayout;
use cssdts::paths::{is_declaration_file, normalize, PathMapper};

fn relocated() -> PathMapper {
    PathMapper::new(
        "/proj",
        OutputLayout::Relocated {
            output_root: "/proj/types".into(),
            source_root: "/proj/src".into(),
        },
    )
}

#[test]
fn in_place_appends_the_declaration_suffix() {
    let mapper = PathMapper::new("/proj", OutputLayout::InPlace);
    assert_eq!(
        mapper.declaration_path_for(Path::new("/proj/src/sample.module.css")),
        PathBuf::from("/proj/src/sample.module.css.d.ts")
    );
}

#[test]
fn relocated_mirrors_below_the_source_root() {
    assert_eq!(
        relocated().declaration_path_for(Path::new("/proj/src/components/Button.module.css")),
        PathBuf::from("/proj/types/components/Button.module.css.d.ts")
    );
}

#[test]
fn relative_and_absolute_inputs_map_identically() {
    for mapper in [PathMapper::new("/proj", OutputLayout::InPlace), relocated()] {
        let abs = mapper.declaration_path_for(Path::new("/proj/src/a/b.module.css"));
        let rel = mapper.declaration_path_for(Path::new("src/a/b.module.css"));
        let dotted = mapper.declaration_path_for(Path::new("./src/x/../a/b.module.css"));
        assert_eq!(abs, rel);
        assert_eq!(abs, dotted);
    }
}

#[test]
fn scope_check_only_applies_when_relocated() {
    let in_place = PathMapper::new("/proj", OutputLayout::InPlace);
    assert!(in_place.source_is_under_scope(Path::new("/elsewhere/a.module.css")));

    let mapper = relocated();
    assert!(mapper.source_is_under_scope(Path::new("/proj/src/a.module.css")));
    assert!(mapper.source_is_under_scope(Path::new("src/deep/a.module.css")));
    assert!(!mapper.source_is_under_scope(Path::new("/proj/lib/a.module.css")));
    assert!(!mapper.source_is_under_scope(Path::new("/proj/srcx/a.module.css")));
    assert!(!mapper.source_is_under_scope(Path::new("src/../lib/a.module.css")));
}

#[test]
fn relocated_path_outside_source_root_stays_deterministic() {
    let mapper = relocated();
    let first = mapper.declaration_path_for(Path::new("/proj/lib/a.module.css"));
    // `<types>/../lib/...`, the same answer a relative-path join would give.
    assert_eq!(first, PathBuf::from("/proj/lib/a.module.css.d.ts"));
    assert_eq!(first, mapper.declaration_path_for(Path::new("lib/a.module.css")));
}

#[test]
fn normalize_folds_dots_without_escaping_root() {
    assert_eq!(normalize(Path::new("/a/b"), Path::new("../c/./d")), PathBuf::from("/a/c/d"));
    assert_eq!(normalize(Path::new("/a"), Path::new("/x/../../y")), PathBuf::from("/y"));
}

#[test]
fn declaration_files_are_recognised_by_suffix() {
    assert!(is_declaration_file(Path::new("/p/a.module.css.d.ts")));
    assert!(is_declaration_file(Path::new("index.d.ts")));
    assert!(!is_declaration_file(Path::new("/p/a.module.css")));
    assert!(!is_declaration_file(Path::new("/p/d.ts/a.css")));
}

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,8}"
}

proptest! {
    #[test]
    fn mapping_is_stable_and_form_independent(
        dirs in proptest::collection::vec(segment(), 0..4),
        stem in segment(),
    ) {
        let rel = dirs
            .iter()
            .cloned()
            .chain(std::iter::once(format!("{stem}.module.css")))
            .collect::<Vec<_>>()
            .join("/");
        let rel_path = PathBuf::from("src").join(&rel);
        let abs_path = Path::new("/proj").join(&rel_path);

        for mapper in [PathMapper::new("/proj", OutputLayout::InPlace), relocated()] {
            let a = mapper.declaration_path_for(&abs_path);
            let b = mapper.declaration_path_for(&rel_path);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(&a, &mapper.declaration_path_for(&abs_path));
            prop_assert!(a.to_string_lossy().ends_with(".module.css.d.ts"));
            prop_assert!(is_declaration_file(&a));
        }

        let mirrored = relocated().declaration_path_for(&abs_path);
        prop_assert_eq!(mirrored, Path::new("/proj/types").join(format!("{rel}.d.ts")));
    }
}
