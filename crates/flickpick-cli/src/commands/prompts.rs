use color_eyre::Result;
use console::{Key, Term};
use dialoguer::Password;
use movie_browse_core::StarRating;
use owo_colors::OwoColorize;

use super::star_row;

/// Prompt for the API key (masked input)
pub fn prompt_api_key() -> Result<String> {
    Password::new()
        .with_prompt("OMDb API key")
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read API key: {}", e))
}

/// Interactive star row. Arrow keys move a transient preview, Enter commits
/// it, `a` accepts the committed rating, Esc cancels. Returns the committed
/// rating and how many times it was revised, or None when cancelled.
pub fn prompt_star_rating(term: &Term, max: u8) -> Result<Option<(u8, u32)>> {
    let mut rating = StarRating::new(max);
    rating.hover(1);

    term.write_line("Rate this movie  (←/→ preview, Enter rate, a accept, Esc cancel)")?;

    loop {
        let shown = rating.display_value();
        let mut line = format!("{} {:2}/{}", star_row(shown, max).yellow(), shown, max);
        if let Some(committed) = rating.value() {
            line.push_str(&format!("  rated: {}", committed.to_string().bold()));
        }
        term.clear_line()?;
        term.write_str(&line)?;

        match term.read_key()? {
            Key::ArrowLeft => {
                let next = rating.display_value().saturating_sub(1).max(1);
                rating.hover(next);
            }
            Key::ArrowRight => {
                let next = (rating.display_value() + 1).min(max);
                rating.hover(next);
            }
            Key::Char(c) if c.is_ascii_digit() => {
                // '0' means 10 on a ten-star row
                let level = if c == '0' { 10 } else { c as u8 - b'0' };
                rating.hover(level);
            }
            Key::Enter => {
                rating.select_preview();
            }
            Key::Char('a') => {
                if let Some(committed) = rating.value() {
                    term.write_line("")?;
                    return Ok(Some((committed, rating.revisions())));
                }
            }
            Key::Escape => {
                term.write_line("")?;
                return Ok(None);
            }
            _ => {}
        }
    }
}
