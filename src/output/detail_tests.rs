use std::io::Cursor;

use crate::history::SectionParser;
use crate::tagfile::TagFile;

use super::*;

fn entry_of(input: &str) -> crate::history::Entry {
    let mut file = TagFile::new(Cursor::new(input.to_string()));
    let section = file.next_section().unwrap().expect("fixture has a section");
    SectionParser::new().parse_section(&section)
}

#[test]
fn detail_view_prints_all_header_lines() {
    let entry = entry_of(
        "Start-Date: 2025-09-01  15:22:56\n\
         Commandline: apt install rust-coreutils\n\
         Requested-By: user (1000)\n\
         Install: rust-coreutils:amd64 (0.1.0+git20250813.4af2a84-0ubuntu2)\n\
         End-Date: 2025-09-01  15:22:57",
    );

    let output = DetailFormatter::new(ColorMode::Never).format(&entry, 0);
    assert!(output.contains("Transaction ID : 0"));
    assert!(output.contains("Start time     : 2025-09-01  15:22:56"));
    assert!(output.contains("End time       : 2025-09-01  15:22:57"));
    assert!(output.contains("Requested by   : user (1000)"));
    assert!(output.contains("Command line   : apt install rust-coreutils"));
    assert!(output.contains("Packages changed: "));
    assert!(
        output.contains("    Install rust-coreutils:amd64 (0.1.0+git20250813.4af2a84-0ubuntu2)")
    );
}

#[test]
fn error_and_comment_lines_appear_only_when_non_empty() {
    let without = entry_of(
        "Start-Date: 2025-09-01  15:22:56\n\
         Install: a (1.0)\n",
    );
    let output = DetailFormatter::new(ColorMode::Never).format(&without, 0);
    assert!(!output.contains("Error"));
    assert!(!output.contains("Comment"));

    let with = entry_of(
        "Start-Date: 2025-09-01  15:22:56\n\
         Error: An error occurred\n\
         Comment: This is a comment\n\
         Install: a (1.0)\n",
    );
    let output = DetailFormatter::new(ColorMode::Never).format(&with, 0);
    assert!(output.contains("Error          : An error occurred"));
    assert!(output.contains("Comment        : This is a comment"));
}

#[test]
fn error_line_is_red_when_colors_are_forced() {
    let entry = entry_of(
        "Start-Date: 2025-09-01  15:22:56\n\
         Error: An error occurred\n\
         Install: a (1.0)\n",
    );

    let output = DetailFormatter::new(ColorMode::Always).format(&entry, 0);
    assert!(output.contains("\x1b[31mError          : An error occurred\x1b[0m"));
}

#[test]
fn never_mode_emits_no_escape_codes() {
    let entry = entry_of(
        "Start-Date: 2025-09-01  15:22:56\n\
         Error: An error occurred\n\
         Install: a (1.0)\n",
    );

    let output = DetailFormatter::new(ColorMode::Never).format(&entry, 0);
    assert!(!output.contains('\x1b'));
}

#[test]
fn two_version_event_renders_an_arrow() {
    let entry = entry_of(
        "Start-Date: 2025-09-01  15:22:56\n\
         Upgrade: pkg (1.0, 2.0)\n",
    );

    let output = DetailFormatter::new(ColorMode::Never).format(&entry, 3);
    assert!(output.contains("    Upgrade pkg (1.0 -> 2.0)"));
}

#[test]
fn automatic_marker_renders_single_version() {
    let entry = entry_of(
        "Start-Date: 2025-09-01  15:22:56\n\
         Install: pkg (1.0, automatic)\n",
    );

    let output = DetailFormatter::new(ColorMode::Never).format(&entry, 0);
    assert!(output.contains("    Install pkg (1.0)"));
    assert!(!output.contains("->"));
}

#[test]
fn events_are_ordered_by_raw_substring() {
    let entry = entry_of(
        "Start-Date: 2025-09-01  15:22:56\n\
         Install: zebra (1.0), apple (2.0)\n",
    );

    let output = DetailFormatter::new(ColorMode::Never).format(&entry, 0);
    let apple = output.find("Install apple").unwrap();
    let zebra = output.find("Install zebra").unwrap();
    assert!(apple < zebra);
}

#[test]
fn each_kind_group_ends_with_a_blank_line() {
    let entry = entry_of(
        "Start-Date: 2025-09-01  15:22:56\n\
         Install: a (1.0)\n\
         Remove: b (2.0)\n",
    );

    let output = DetailFormatter::new(ColorMode::Never).format(&entry, 0);
    assert!(output.contains("    Install a (1.0)\n\n"));
    assert!(output.contains("    Remove b (2.0)\n\n"));
}

#[test]
fn unparseable_event_prints_an_empty_line() {
    let entry = entry_of(
        "Start-Date: 2025-09-01  15:22:56\n\
         Install: garbage without parens\n",
    );

    let output = DetailFormatter::new(ColorMode::Never).format(&entry, 0);
    assert!(output.contains("Packages changed: \n\n"));
}
