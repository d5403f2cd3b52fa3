use std::fs;
use std::path::PathBuf;
use unicode_segmentation::UnicodeSegmentation;

/// Number of user-perceived characters in `s`
#[allow(dead_code)]
pub fn char_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Writes a table definition under `target/` and returns its path
#[allow(dead_code)]
pub fn write_definition(name: &str, contents: &[u8]) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target").join("test-tables");
    fs::create_dir_all(&dir).expect("Failed to create test table directory");
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test table");
    path
}

/// Sample inputs mixing mapped, unmapped, combining and multi-scalar characters
#[allow(dead_code)]
pub fn sample_inputs() -> Vec<&'static str> {
    vec![
        "",
        "ebiuzh",
        "קרא",
        "ש/",
        "hello",
        "קr1",
        "'׳/",
        "שלום, עולם!",
        "ש\u{05BC}ל\u{05B9}ום",
        "line one\r\nשורה",
        "🇮🇱 ש 👍🏽",
        "\t  \n",
        "HELLO ABC",
    ]
}
