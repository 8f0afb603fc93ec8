use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};

use rs_markov_core::{Exploration, Punctuation, Settings};

/// Asks which punctuation excerpts should end with.
pub fn punctuation() -> Result<Punctuation> {
    let stdin = io::stdin();
    read_punctuation(&mut stdin.lock(), &mut io::stdout())
}

/// Asks which order to keep until a valid one is entered.
pub fn order(exploration: &Exploration, settings: &Settings) -> Result<usize> {
    println!("Which ngram do you want to save?");
    let stdin = io::stdin();
    read_order(&mut stdin.lock(), &mut io::stdout(), exploration, settings)
}

fn read_punctuation<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Punctuation> {
    writeln!(output, "Do you want to end with '.' or '?'")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let punctuation = Punctuation::from_input(&line);
    if punctuation.as_char().to_string() != line.trim() {
        writeln!(output, "Default is looking for something that ends with .")?;
    }
    Ok(punctuation)
}

fn read_order<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    exploration: &Exploration,
    settings: &Settings,
) -> Result<usize> {
    let (min, max) = (settings.min_order, settings.max_order);
    loop {
        writeln!(output, "Enter a number between {} and {}?", min, max)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("no order selected");
        }
        let order = match line.trim().parse::<usize>() {
            Ok(order) => order,
            Err(_) => {
                writeln!(output, "You need to enter a number (between {} and {}). Try again!", min, max)?;
                continue;
            }
        };
        if !settings.orders().contains(&order) {
            writeln!(output, "You did not enter a number between {} and {}, try again.", min, max)?;
            continue;
        }
        if exploration.get(order).is_none() {
            writeln!(output, "No story was generated for a {}-gram, try again.", order)?;
            continue;
        }
        return Ok(order);
    }
}
