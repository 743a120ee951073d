//! Ingredient list commands

use anyhow::Result;
use std::io::Write;

use crate::pantry::{double_yell, for_each_ingredient, yell_out, IssueTracker};

pub fn run_ingredients_command(
    yell: bool,
    issues: &dyn IssueTracker,
    out: &mut dyn Write,
) -> Result<()> {
    let mut lines = Vec::new();
    for_each_ingredient(|ingredient| lines.push(ingredient.to_string()));

    for line in lines {
        let line = if yell {
            yell_out(Some(line.as_str()), issues)?
        } else {
            line
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn run_yell_command(
    word: Option<&str>,
    double: bool,
    issues: &dyn IssueTracker,
    out: &mut dyn Write,
) -> Result<()> {
    let shouted = if double {
        double_yell(word, issues)?
    } else {
        yell_out(word, issues)?
    };
    writeln!(out, "{}", shouted)?;
    Ok(())
}
