use std::path::PathBuf;

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("sink_unit").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn doc(text: &str) -> SvgDocument {
    SvgDocument::new(text.to_owned())
}

#[test]
fn file_sink_creates_parent_and_overwrites() {
    let dir = scratch("nested");
    let path = dir.join("a").join("b").join("snake.svg");
    let mut sink = FileSink::new(&path);

    sink.write_document(&doc("<svg>first</svg>")).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg>first</svg>");

    sink.write_document(&doc("<svg>second</svg>")).unwrap();
    assert_eq!(std::fs::read_to_string(sink.path()).unwrap(), "<svg>second</svg>");
}

#[test]
fn file_sink_reports_blocked_directory() {
    let dir = scratch("blocked");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not_a_dir");
    std::fs::write(&blocker, b"x").unwrap();

    let mut sink = FileSink::new(blocker.join("snake.svg"));
    let err = sink.write_document(&doc("<svg/>")).unwrap_err();
    assert!(err.to_string().contains("failed to create output directory"));
}

#[test]
fn bare_file_name_needs_no_directory() {
    ensure_parent_dir(std::path::Path::new("snake.svg")).unwrap();
}

#[test]
fn in_memory_sink_collects_documents() {
    let mut sink = InMemorySink::new();
    sink.write_document(&doc("<svg>1</svg>")).unwrap();
    sink.write_document(&doc("<svg>2</svg>")).unwrap();
    let texts: Vec<_> = sink.documents().iter().map(|d| d.as_str()).collect();
    assert_eq!(texts, vec!["<svg>1</svg>", "<svg>2</svg>"]);
}
