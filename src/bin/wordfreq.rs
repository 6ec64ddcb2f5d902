use std::{error::Error, fs};

use clap::Parser;

use spendlog::{TOP_TOKEN_LIMIT, top_tokens};

/// Print the ten most frequent words in a text file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a UTF-8 text file.
    #[arg(default_value = "words.txt")]
    path: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.path)?;

    for entry in top_tokens(&text, TOP_TOKEN_LIMIT) {
        println!("{} {}", entry.token, entry.count);
    }

    Ok(())
}
