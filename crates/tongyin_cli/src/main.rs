//! Converts text files with a homophone dictionary from the command line.

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use eyre::WrapErr;
use std::{path::Path, time::Duration};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tongyin::{Dictionary, DictionarySource, FileSource, HttpSource, RandomPicker};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            dictionary,
            input,
            output,
            seed,
            timeout,
        } => {
            let mut dictionary = open_dictionary(&dictionary);
            if let Some(timeout) = timeout {
                dictionary = dictionary.with_timeout(Duration::from_secs(timeout));
            }
            let text = read_input(input.as_deref()).await?;
            let converted = convert(&dictionary, &text, seed).await?;
            write_output(output.as_deref(), &converted).await?;
        }
        Command::Stats { dictionary } => {
            let stats = open_dictionary(&dictionary)
                .load()
                .await
                .wrap_err("Failed to load the dictionary")?;
            println!("pinyin: {}", stats.class_count);
            println!("characters: {}", stats.total_char_count);
        }
    }

    Ok(())
}

fn open_dictionary(location: &str) -> Dictionary<Box<dyn DictionarySource>> {
    let source: Box<dyn DictionarySource> =
        if location.starts_with("http://") || location.starts_with("https://") {
            Box::new(HttpSource::new(location))
        } else {
            Box::new(FileSource::new(location))
        };
    Dictionary::new(source)
}

async fn convert<S: DictionarySource>(
    dictionary: &Dictionary<S>,
    text: &str,
    seed: Option<u64>,
) -> eyre::Result<String> {
    let conversion = match seed {
        Some(seed) => {
            dictionary
                .convert_detailed_with(text, RandomPicker::seeded(seed))
                .await
        }
        None => {
            dictionary
                .convert_detailed_with(text, RandomPicker::thread())
                .await
        }
    }
    .wrap_err("Failed to convert text")?;
    tracing::info!(
        "Replaced {} distinct characters",
        conversion.replacements.len()
    );
    Ok(conversion.text)
}

async fn read_input(path: Option<&Path>) -> eyre::Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("Failed to read input at '{}'", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .wrap_err("Failed to read stdin")?;
            Ok(text)
        }
    }
}

async fn write_output(path: Option<&Path>, text: &str) -> eyre::Result<()> {
    match path {
        Some(path) => tokio::fs::write(path, text)
            .await
            .wrap_err_with(|| format!("Failed to write output to '{}'", path.display())),
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(text.as_bytes()).await?;
            stdout.flush().await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DICTIONARY: &str = "ma\t妈\t麻\t马\nni\t你\t铱\t伊\n";

    #[tokio::test]
    async fn seeded_conversion_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.txt");
        std::fs::write(&path, DICTIONARY).unwrap();
        let dictionary = open_dictionary(path.to_str().unwrap());

        let first = convert(&dictionary, "你妈妈好", Some(3)).await.unwrap();
        let second = convert(&dictionary, "你妈妈好", Some(3)).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.chars().count(), 4);
        assert!(first.ends_with('好'));
    }

    #[tokio::test]
    async fn reads_and_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        std::fs::write(&input, "hello").unwrap();

        let text = read_input(Some(&input)).await.unwrap();
        write_output(Some(&output), &text).await.unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "hello");
    }

    #[tokio::test]
    async fn missing_dictionary_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let dictionary = open_dictionary(path.to_str().unwrap());
        assert!(convert(&dictionary, "你好", None).await.is_err());
        assert_eq!(convert(&dictionary, "hi", None).await.unwrap(), "hi");
    }
}
