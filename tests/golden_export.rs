use std::fs;
use std::path::PathBuf;

use mediakit::{export_document, templates, Attribution, BuiltinIcons, ElementType, KitConfig};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_export_matches_digest() {
    let state = templates::find("Professional Dark")
        .expect("template")
        .instantiate(&KitConfig::default())
        .set_creator_name("Golden Creator".into())
        .add_element(ElementType::Chart, None)
        .add_element(ElementType::Photo, None);
    assert_eq!(state.canvas_height(), 1040);
    let doc = export_document(&state, &Attribution::default(), &BuiltinIcons::new());
    assert_eq!(doc.html.matches(r#"class="hover-scale""#).count(), 6);
    assert!(doc.html.contains("top: 80.76923076923077%;"));
    let digest = doc.digest();

    let expected_path = golden_path("professional_dark.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path)
        .unwrap_or_else(|e| panic!("missing golden {:?} ({}); run with UPDATE_GOLDENS=1", expected_path, e));
    assert_eq!(digest, exp.trim());
}
