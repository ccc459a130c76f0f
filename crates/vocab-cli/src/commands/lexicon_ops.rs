use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use vocab_core::lexicon::{Direction, Lexicon};
use vocab_core::translate::translate_sentence;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn default_store_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    format!("{home}/.local/share/vocab/lexicon.json")
}

fn open_lexicon(path: &Path) -> Lexicon {
    die!(Lexicon::open(path), "Error opening lexicon: {}")
}

pub fn translate(path: &Path, direction: Direction, text: &str) {
    let lexicon = open_lexicon(path);
    println!("{}", translate_sentence(&lexicon, direction, text));
}

/// Split a comma-separated translation list, dropping empty pieces.
pub fn split_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

pub fn add(path: &Path, direction: Direction, key: &str, values: &[String]) {
    let key = key.trim();
    let values: Vec<String> = values
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    // The lexicon itself accepts anything; empty input is rejected here.
    if key.is_empty() || values.is_empty() {
        eprintln!("Error: a word and at least one translation are required");
        process::exit(1);
    }

    let mut lexicon = open_lexicon(path);
    lexicon.add(direction, key, &values);
    die!(lexicon.save(), "Error saving lexicon: {}");
    println!("Added: {key} → {}", values.join(", "));
}

pub fn list(path: &Path, direction: Direction) {
    let lexicon = open_lexicon(path);
    let entries = lexicon.entries(direction);
    if entries.is_empty() {
        println!("(empty)");
    } else {
        for (key, values) in &entries {
            println!("{key}\t{}", values.join(", "));
        }
        println!("---");
        println!("{} entries", entries.len());
    }
}

fn prompt(message: &str) -> Option<String> {
    print!("{message}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

fn prompt_direction() -> Option<Direction> {
    match prompt("Direction (1=forward, 2=reverse): ")?.as_str() {
        "1" => Some(Direction::Forward),
        "2" => Some(Direction::Reverse),
        _ => {
            println!("Invalid direction.");
            None
        }
    }
}

/// Menu loop over stdin: translate sentences and register words until
/// the user quits. A failed persist is reported but does not end the
/// session; the in-memory lexicon stays usable.
pub fn interactive(path: &Path) {
    let mut lexicon = open_lexicon(path);

    loop {
        println!();
        println!("1. Translate a sentence");
        println!("2. Add a word");
        println!("0. Quit");
        let Some(choice) = prompt("Select an option: ") else {
            break;
        };

        match choice.as_str() {
            "0" => break,
            "1" => {
                let Some(direction) = prompt_direction() else {
                    continue;
                };
                let Some(text) = prompt("Sentence: ") else {
                    break;
                };
                println!("{}", translate_sentence(&lexicon, direction, &text));
            }
            "2" => {
                let Some(direction) = prompt_direction() else {
                    continue;
                };
                let Some(key) = prompt("Word: ") else {
                    break;
                };
                let Some(raw) = prompt("Translations (comma-separated): ") else {
                    break;
                };
                let values = split_values(&raw);
                if key.is_empty() || values.is_empty() {
                    println!("A word and at least one translation are required.");
                    continue;
                }
                lexicon.add(direction, &key, &values);
                match lexicon.save() {
                    Ok(()) => println!("Added: {key} → {}", values.join(", ")),
                    Err(e) => eprintln!("Warning: added in memory, but saving failed: {e}"),
                }
            }
            _ => println!("Invalid option."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_values_trims_and_drops_empties() {
        assert_eq!(split_values("way, path"), vec!["way", "path"]);
        assert_eq!(split_values(" way ,, "), vec!["way"]);
        assert!(split_values("").is_empty());
        assert!(split_values(" , ,").is_empty());
    }
}
