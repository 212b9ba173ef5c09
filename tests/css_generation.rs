// tests/css_generation.rs

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use cssdts::fs::mock::MockFileSystem;
use cssdts::generate::{
    extract_class_names, render_declaration, to_camel_case, CssModuleGenerator, CssSyntaxError,
    DeclarationGenerator, GeneratorOptions,
};

type TestResult = Result<(), Box<dyn Error>>;

fn names(css: &str) -> Vec<String> {
    extract_class_names(css)
        .expect("valid css")
        .into_iter()
        .collect()
}

#[test]
fn collects_class_selectors_in_order() {
    assert_eq!(
        names(".container { display: flex; } .header, .footer > .link:hover { color: red }"),
        vec!["container", "footer", "header", "link"]
    );
}

#[test]
fn declaration_values_do_not_produce_classes() {
    let css = r#"
.icon { background: url(images/icon.png); margin: .5em; content: ".fake"; }
"#;
    assert_eq!(names(css), vec!["icon"]);
}

#[test]
fn quoted_selector_text_does_not_produce_classes() {
    let css = r#"
a[href$=".pdf"] { }
.link[title='see .note'], .link[data-x="a\".b"] { }
"#;
    assert_eq!(names(css), vec!["link"]);
}

#[test]
fn comments_are_ignored() {
    let css = "/* .commented { } */ .real { } /* trailing { */";
    assert_eq!(names(css), vec!["real"]);
}

#[test]
fn nested_rules_inside_at_rules_count() {
    let css = r#"
@media (min-width: 600px) {
  .wide { width: 100%; }
  .wide.tall { height: 100%; }
}
@import url("other.css");
@keyframes spin { from { rotate: 0deg; } to { rotate: 360deg; } }
.a:not(.b) { }
"#;
    assert_eq!(names(css), vec!["a", "b", "tall", "wide"]);
}

#[test]
fn malformed_stylesheets_are_rejected() {
    assert!(matches!(
        extract_class_names(".a { color: red;"),
        Err(CssSyntaxError::UnclosedBlock(1))
    ));
    assert!(matches!(
        extract_class_names(".a { } }"),
        Err(CssSyntaxError::UnexpectedClose(_))
    ));
    assert!(matches!(
        extract_class_names(".a { } /* open"),
        Err(CssSyntaxError::UnterminatedComment(_))
    ));
    assert!(matches!(
        extract_class_names(".a { content: \"x }"),
        Err(CssSyntaxError::UnterminatedString(_))
    ));
}

#[test]
fn camel_case_conversion() {
    assert_eq!(to_camel_case("container"), "container");
    assert_eq!(to_camel_case("my-button"), "myButton");
    assert_eq!(to_camel_case("btn_primary--active"), "btnPrimaryActive");
    assert_eq!(to_camel_case("Button"), "button");
    assert_eq!(to_camel_case("fooBar"), "fooBar");
    assert_eq!(to_camel_case("HTMLTitle"), "htmlTitle");
    assert_eq!(to_camel_case("-leading"), "leading");
    assert_eq!(to_camel_case("col-2"), "col2");
}

#[test]
fn rendering_is_sorted_and_stable() {
    let first = render_declaration(["header", "footer", "header"]);
    let second = render_declaration(["footer", "header"]);
    assert_eq!(first, second);
    assert_eq!(
        first,
        "declare const styles: {\n  readonly \"footer\": string;\n  readonly \"header\": string;\n};\nexport default styles;\n"
    );
}

#[tokio::test]
async fn generator_exports_camel_cased_names_only() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("/proj/a.module.css", ".main-title { } .sub_title { } .plain { }");

    let generator = CssModuleGenerator::new(Arc::new(fs), GeneratorOptions { camel_case: true });
    let text = generator.generate(Path::new("/proj/a.module.css")).await?;

    assert!(text.contains("readonly \"mainTitle\": string;"));
    assert!(text.contains("readonly \"subTitle\": string;"));
    assert!(text.contains("readonly \"plain\": string;"));
    assert!(!text.contains("main-title"));
    Ok(())
}

#[tokio::test]
async fn generator_keeps_names_verbatim_without_camel_case() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("/proj/a.module.css", ".main-title { }");

    let generator = CssModuleGenerator::new(Arc::new(fs), GeneratorOptions::default());
    let text = generator.render(Path::new("/proj/a.module.css"))?;

    assert!(text.contains("readonly \"main-title\": string;"));
    Ok(())
}

#[tokio::test]
async fn generator_fails_for_missing_or_malformed_files() {
    let fs = MockFileSystem::new();
    fs.add_file("/proj/bad.module.css", ".a { color: red;");
    let generator = CssModuleGenerator::new(Arc::new(fs), GeneratorOptions { camel_case: true });

    let missing = generator.generate(Path::new("/proj/none.module.css")).await;
    assert!(missing.is_err());

    let malformed = generator
        .generate(Path::new("/proj/bad.module.css"))
        .await
        .expect_err("unclosed block must fail");
    assert!(format!("{malformed:#}").contains("unclosed block"));
}
