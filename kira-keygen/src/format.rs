use std::path::PathBuf;

use console::Style;
use kira_types::primitives::Role;

use crate::master::MnemonicSet;

// ── Styles ──────────────────────────────────────────────────────────────────

pub fn style_success() -> Style {
    Style::new().green()
}

pub fn style_warn() -> Style {
    Style::new().yellow()
}

pub fn style_info() -> Style {
    Style::new().cyan()
}

pub fn style_bold() -> Style {
    Style::new().bold()
}

pub fn style_dim() -> Style {
    Style::new().dim()
}

// ── Output helpers ──────────────────────────────────────────────────────────

/// Print a success message with a green checkmark.
pub fn print_success(msg: &str) {
    println!("  {} {}", style_success().apply_to("✓"), msg);
}

/// Print a labelled value.
pub fn print_info(label: &str, value: &str) {
    println!(
        "  {}: {}",
        style_bold().apply_to(label),
        style_info().apply_to(value)
    );
}

/// Print a divider.
pub fn print_divider() {
    println!(
        "  {}",
        style_dim().apply_to("────────────────────────────────")
    );
}

/// Lay out mnemonic words as numbered rows of four.
pub fn mnemonic_rows(phrase: &str) -> Vec<String> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    words
        .chunks(4)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, word)| format!("{:>2}. {:<10}", row * 4 + col + 1, word))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Print a mnemonic under a heading.
pub fn print_mnemonic_box(title: &str, phrase: &str) {
    let warn = style_warn();
    let bold = style_bold();

    println!();
    println!("  {}", warn.apply_to(format!("── {} ", title)));
    for row in mnemonic_rows(phrase) {
        println!("    {}", bold.apply_to(row));
    }
}

/// Print every mnemonic in the set followed by the node identifier.
pub fn print_key_set(set: &MnemonicSet) {
    println!();
    println!(
        "  {}",
        style_warn().apply_to("These phrases control your validator. Store them safely offline.")
    );
    for role in Role::ALL {
        print_mnemonic_box(&role.to_string(), set.mnemonic(role));
    }
    println!();
    print_divider();
    print_info("Validator node ID", set.node_id());
}

/// Print the files written by a key-set run.
pub fn print_written(paths: &[PathBuf]) {
    for path in paths {
        print_success(&format!("wrote {}", path.display()));
    }
    println!(
        "  {}",
        style_dim().apply_to("The output directory contains the master mnemonic. Keep it private.")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonic_rows_numbering() {
        let phrase = (1..=24).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let rows = mnemonic_rows(&phrase);
        assert_eq!(rows.len(), 6);
        assert!(rows[0].starts_with(" 1. w1"));
        assert!(rows[5].contains("24. w24"));
    }

    #[test]
    fn test_mnemonic_rows_partial_row() {
        let rows = mnemonic_rows("alpha beta gamma delta epsilon");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], " 5. epsilon");
    }

    #[test]
    fn test_mnemonic_rows_repeated_words() {
        let rows = mnemonic_rows("abandon abandon abandon abandon abandon");
        assert!(rows[1].starts_with(" 5. abandon"));
    }
}
