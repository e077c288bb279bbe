use std::fs;

use vinculum::batch::parse_source;
use walkdir::WalkDir;

/// Expected outcome written after `=>` in a case file.
enum Expected {
    Value(i64),
    Invalid,
}

fn read_expected(text: &str) -> Expected {
    match text.trim() {
        "invalid" => Expected::Invalid,
        value => Expected::Value(value.parse()
                                      .unwrap_or_else(|e| panic!("Bad value {value:?}: {e}"))),
    }
}

#[test]
fn case_files_hold() {
    let mut count = 0;

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path().extension().is_some_and(|ext| ext == "roman")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let Some((input, expected)) = line.split_once("=>") else {
                continue;
            };
            count += 1;

            let entries = parse_source(input).unwrap_or_else(|e| {
                                                 panic!("{path:?} line {}: {e}", i + 1)
                                             });
            assert_eq!(entries.len(), 1, "{path:?} line {}", i + 1);
            let result = &entries[0].result;

            match read_expected(expected) {
                Expected::Value(value) => {
                    assert_eq!(result.value(), Some(value), "{path:?} line {}: {result}", i + 1);
                },
                Expected::Invalid => {
                    assert!(!result.is_valid(), "{path:?} line {}: {result}", i + 1);
                    assert!(result.invalidity_reason().is_some(),
                            "{path:?} line {}: invalid without a reason",
                            i + 1);
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}
