use anyhow::Result;
use std::io::{self, Write};

pub(crate) fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let visible = (key.chars().count() / 2).min(4);
    format!("{}***", key.chars().take(visible).collect::<String>())
}

/// Reads one line from stdin. `None` on EOF or an exit word.
pub(crate) fn prompt_topic() -> Result<Option<String>> {
    print!("📚 What topic would you like to learn? (empty or 'quit' to exit): ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    let trimmed = input.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("quit")
        || trimmed.eq_ignore_ascii_case("exit")
    {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
