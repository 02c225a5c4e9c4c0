use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use ngram_writer_core::io::{get_filename, read_words, render_sentence};
use ngram_writer_core::model::generation_input::GenerationInput;
use ngram_writer_core::model::generator::Writer;
use ngram_writer_core::model::random::{RandomSource, RngSource};

/// Random writer: builds word n-grams from a document and prints random text.
///
/// Any value not given on the command line is prompted for.
#[derive(Parser, Debug, Default)]
#[command(name = "ngram-writer", version)]
struct Args {
    /// Input text file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Value of N (number of words per n-gram, at least 1)
    #[arg(short = 'n', long)]
    order: Option<usize>,

    /// Generate this many words once and exit (0 generates nothing)
    #[arg(short, long)]
    length: Option<usize>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    // Same seed, same text
    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(args, &mut stdin.lock(), &mut stdout.lock(), rng.as_mut())
}

/// Runs the whole session against the given input and output streams.
///
/// End of input is treated as "0 to quit" at any prompt.
fn run<I: BufRead, O: Write>(
    args: Args,
    input: &mut I,
    out: &mut O,
    rng: &mut dyn RandomSource,
) -> Result<(), Box<dyn Error>> {
    welcome(out)?;

    let Some((name, tokens)) = read_corpus(args.file, input, out)? else {
        writeln!(out, "Exiting.")?;
        return Ok(());
    };

    // An invalid `--order` is reported like a typed one, then prompted for
    let mut settings = GenerationInput::default();
    let mut flag_order = args.order;
    loop {
        let candidate = match flag_order.take() {
            Some(order) => Some(order),
            None => {
                let Some(value) = get_integer(input, out, "Value of N? ")? else {
                    writeln!(out, "Exiting.")?;
                    return Ok(());
                };
                usize::try_from(value).ok()
            }
        };
        if candidate.is_some_and(|order| settings.set_order(order).is_ok()) {
            break;
        }
        writeln!(out, "N must be 1 or greater.")?;
    }

    let writer = Writer::from_tokens(&name, &tokens, settings.order())?;
    info!(
        "Built {}-gram table for '{}' ({} keys)",
        settings.order(),
        writer.name(),
        writer.table().len()
    );

    if let Some(length) = args.length {
        settings.length = length;
        print_sentence(&writer, &settings, out, rng)?;
        return Ok(());
    }

    loop {
        let Some(value) = get_integer(input, out, "\n# of random words to generate (0 to quit)? ")? else {
            break;
        };
        settings.length = usize::try_from(value).unwrap_or(0);
        if !settings.wants_output() {
            break;
        }
        print_sentence(&writer, &settings, out, rng)?;
    }

    writeln!(out, "Exiting.")?;
    Ok(())
}

fn welcome<O: Write>(out: &mut O) -> io::Result<()> {
    writeln!(out, "Welcome to the N-Grams random writer.")?;
    writeln!(out, "This program makes random text based on a document.")?;
    writeln!(out, "Give me an input file and an 'N' value for groups")?;
    writeln!(out, "of words, and I'll create random text for you.")?;
    writeln!(out)
}

/// Loads the corpus from `file`, or prompts until a readable file with at
/// least one word is given.
///
/// Returns `None` if input ends before that.
fn read_corpus<I: BufRead, O: Write>(
    file: Option<PathBuf>,
    input: &mut I,
    out: &mut O,
) -> Result<Option<(String, Vec<String>)>, Box<dyn Error>> {
    if let Some(path) = file {
        let tokens = read_words(&path)?;
        return Ok(Some((get_filename(&path)?, tokens)));
    }

    loop {
        let Some(line) = prompt(input, out, "Input file? ")? else {
            return Ok(None);
        };
        let path = PathBuf::from(line.trim());
        match read_words(&path) {
            Ok(tokens) if tokens.is_empty() => writeln!(out, "That file has no words. Try again.")?,
            Ok(tokens) => return Ok(Some((get_filename(&path)?, tokens))),
            Err(_) => writeln!(out, "Unable to open that file. Try again.")?,
        }
    }
}

fn print_sentence<O: Write>(
    writer: &Writer,
    settings: &GenerationInput,
    out: &mut O,
    rng: &mut dyn RandomSource,
) -> io::Result<()> {
    match writer.write(settings.length, rng) {
        Ok(Some(sentence)) => writeln!(out, "{}", render_sentence(&sentence)),
        Ok(None) => Ok(()),
        Err(e) => writeln!(out, "Could not generate text: {e}"),
    }
}

/// Prints `message` and reads one line. Returns `None` at end of input.
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, message: &str) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

/// Prompts until an integer is entered. Returns `None` at end of input.
fn get_integer<I: BufRead, O: Write>(input: &mut I, out: &mut O, message: &str) -> io::Result<Option<i64>> {
    loop {
        let Some(line) = prompt(input, out, message)? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Illegal integer format. Try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ngram_writer_core::model::random::ScriptedSource;
    use std::fs;
    use std::io::Cursor;

    fn corpus_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("ngram-writer-{}-{name}.txt", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    fn session(args: Args, stdin: &str, script: Vec<usize>) -> String {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut rng = ScriptedSource::new(script);
        run(args, &mut input, &mut out, &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_interactive_session() {
        let path = corpus_file("interactive", "the cat sat on the mat\n");
        // Keys in first-seen order: the, cat, sat, on, mat
        let stdin = format!("missing-file.txt\n{}\nabc\n0\n2\n4\n0\n", path.display());
        let output = session(Args::default(), &stdin, vec![0, 0]);

        assert!(output.contains("Unable to open that file. Try again."));
        assert!(output.contains("Illegal integer format. Try again."));
        assert!(output.contains("N must be 1 or greater."));
        assert!(output.contains("... the cat sat on..."));
        assert!(output.trim_end().ends_with("Exiting."));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_one_shot_from_flags() {
        let path = corpus_file("one-shot", "a b c");
        let args = Args { file: Some(path.clone()), order: Some(2), length: Some(5), seed: None };
        let output = session(args, "", vec![2]);

        assert!(output.contains("... c a b c a..."));
        assert!(!output.contains("Exiting."));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_zero_order_flag_prompts_again() {
        let path = corpus_file("zero-order", "a b c");
        let args = Args { file: Some(path.clone()), order: Some(0), length: Some(3), seed: None };
        // Keys in first-seen order: a, b, c
        let output = session(args, "2\n", vec![0]);

        assert!(output.contains("N must be 1 or greater."));
        assert!(output.contains("Value of N? "));
        assert!(output.contains("... a b c..."));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_zero_order_flag_then_end_of_input_quits() {
        let path = corpus_file("zero-order-eof", "a b c");
        let args = Args { file: Some(path.clone()), order: Some(0), length: Some(3), seed: None };
        let output = session(args, "", vec![]);

        assert!(output.contains("N must be 1 or greater."));
        assert!(output.trim_end().ends_with("Exiting."));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_end_of_input_quits() {
        let output = session(Args::default(), "", vec![]);
        assert!(output.trim_end().ends_with("Exiting."));
    }
}
