//! Regex command

use colored::Colorize;
use devtools_kit::RegexTester;

use crate::commands::print_json;
use crate::error::Result;

/// Run the regex command
pub fn run_regex(
    pattern: &str,
    text: &str,
    flags: &str,
    replacement: Option<&str>,
    json: bool,
) -> Result<()> {
    let tester = RegexTester::new(pattern, flags)?;

    if let Some(replacement) = replacement {
        let result = tester.replace(text, replacement);
        if json {
            return print_json(&serde_json::json!({ "result": result }));
        }
        println!("{result}");
        return Ok(());
    }

    let matches = tester.find(text);

    if json {
        return print_json(&serde_json::json!({
            "pattern": tester.pattern(),
            "flags": tester.flags().to_string(),
            "matches": matches,
        }));
    }

    if matches.is_empty() {
        println!("{}", "No matches".dimmed());
        return Ok(());
    }

    for (n, m) in matches.iter().enumerate() {
        println!(
            "{} {} {:?}",
            format!("Match {}", n + 1).bold(),
            format!("[{}..{}]", m.start, m.end).dimmed(),
            m.text
        );
        for group in &m.groups {
            let name = match &group.name {
                Some(name) => format!("${} <{}>", group.index, name),
                None => format!("${}", group.index),
            };
            match &group.text {
                Some(text) => println!("  {:<12} {:?}", name.cyan(), text),
                None => println!("  {:<12} {}", name.cyan(), "(unmatched)".dimmed()),
            }
        }
    }

    let noun = if matches.len() == 1 { "match" } else { "matches" };
    println!();
    println!("{} {}", matches.len(), noun);

    Ok(())
}
