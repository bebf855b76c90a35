//! Interactive text game
//!
//! Reads words line by line, scores them through a [`Session`] and ends on
//! `:quit`, end of input or when the round's time runs out.

use crate::config::GameConfig;
use crate::dictionary::{Dictionary, acceptable_for_listing};
use crate::game::{GameSummary, Session, SubmissionStatus};
use crate::output::formatters::{format_board, format_path, plural_words};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Most missed words shown at the end of a round
const MISSED_SHOWN: usize = 20;

/// Run one round on `session`, reading from `input` and writing to `output`
///
/// The time limit is checked after each line, so a word typed after the
/// deadline is not scored. The session is always finished on return.
///
/// # Errors
///
/// Returns an error on I/O failure reading input or writing output.
pub fn run_play<D, R, W>(
    session: &mut Session<'_, D>,
    config: &GameConfig,
    input: R,
    output: &mut W,
) -> io::Result<GameSummary>
where
    D: Dictionary + ?Sized,
    R: BufRead,
    W: Write,
{
    print_banner(session, config, output)?;
    session.start();

    let mut lines = input.lines();
    loop {
        write!(output, "{} ", ">".bright_cyan())?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        if time_is_up(session, config) {
            writeln!(output, "\n{}", "⏰ Time's up!".bright_yellow().bold())?;
            break;
        }

        match line.trim() {
            "" => {}
            ":quit" | ":q" => break,
            ":board" | ":b" => writeln!(output, "\n{}\n", format_board(session.board(), &[]))?,
            ":words" | ":w" => print_found(session, output)?,
            ":hint" | ":h" => print_hint(session, config, output)?,
            word => print_submission(session, word, output)?,
        }
    }

    session.finish();
    let summary = session.summary();
    print_round_end(session, &summary, config, output)?;
    Ok(summary)
}

fn time_is_up<D: Dictionary + ?Sized>(session: &Session<'_, D>, config: &GameConfig) -> bool {
    if !config.is_timed() {
        return false;
    }
    session
        .elapsed()
        .and_then(|elapsed| elapsed.to_std().ok())
        .is_some_and(|elapsed| elapsed >= config.duration)
}

fn print_banner<D, W>(
    session: &Session<'_, D>,
    config: &GameConfig,
    output: &mut W,
) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    W: Write,
{
    writeln!(output, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(
        output,
        " {} {}",
        "WORD GRID".bright_cyan().bold(),
        format!("· {}", session.player()).bright_white()
    )?;
    writeln!(output, "{}\n", "═".repeat(40).bright_cyan())?;
    writeln!(output, "{}\n", format_board(session.board(), &[]))?;
    writeln!(
        output,
        "Find words of 3+ letters through adjacent cells, each cell once per word."
    )?;
    if config.is_timed() {
        writeln!(output, "You have {} seconds.", config.duration.as_secs())?;
    }
    writeln!(output, "Commands: :board  :words  :hint  :quit\n")
}

fn print_submission<D, W>(
    session: &mut Session<'_, D>,
    word: &str,
    output: &mut W,
) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    W: Write,
{
    let submission = match session.submit_word(word) {
        Ok(submission) => submission,
        Err(err) => return writeln!(output, "{}", err.to_string().red()),
    };

    match submission.status {
        SubmissionStatus::Ok => {
            writeln!(
                output,
                "{} {} {}  (total {})",
                "✓".green().bold(),
                submission.normalized.to_uppercase().bright_white().bold(),
                format!("+{}", submission.points).bright_green(),
                session.score()
            )?;
            if let Some(path) = session.reconstruct_path(&submission.normalized) {
                writeln!(output, "{}", format_board(session.board(), &path))?;
            }
        }
        SubmissionStatus::Repeated => writeln!(
            output,
            "{} {} {}",
            "↺".yellow(),
            submission.normalized.to_uppercase(),
            submission.status.to_string().yellow()
        )?,
        status => writeln!(output, "{} {}", "✗".red().bold(), status.to_string().red())?,
    }
    Ok(())
}

fn print_found<D, W>(session: &Session<'_, D>, output: &mut W) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    W: Write,
{
    let words = session.accepted_words();
    writeln!(
        output,
        "{} · {} points",
        plural_words(words.len()),
        session.score()
    )?;
    if !words.is_empty() {
        writeln!(output, "  {}", words.join(", "))?;
    }
    Ok(())
}

/// Reveal the first letter and length of the longest word not yet found
fn print_hint<D, W>(session: &Session<'_, D>, config: &GameConfig, output: &mut W) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    W: Write,
{
    let hint = missed_for_display(session, config).into_iter().next();
    match hint.as_deref().and_then(|word| Some((word, session.reconstruct_path(word)?))) {
        Some((word, path)) => {
            let first = word.chars().next().map_or('?', |c| c.to_ascii_uppercase());
            writeln!(
                output,
                "💡 A {}-letter word starts at the highlighted {first}:",
                word.len()
            )?;
            writeln!(output, "{}", format_board(session.board(), &path[..1]))
        }
        None => writeln!(output, "No words left to find."),
    }
}

fn print_round_end<D, W>(
    session: &Session<'_, D>,
    summary: &GameSummary,
    config: &GameConfig,
    output: &mut W,
) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    W: Write,
{
    writeln!(output, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(output, " {}", summary.to_string().bright_yellow().bold())?;
    if let Some(longest) = summary.longest_word() {
        writeln!(output, " Longest word: {}", longest.to_uppercase().bright_white())?;
    }
    if let Some(elapsed) = session.elapsed() {
        writeln!(output, " Time played:  {}s", elapsed.num_seconds())?;
    }

    let missed = missed_for_display(session, config);
    if !missed.is_empty() {
        writeln!(output, "\n Missed {}:", plural_words(missed.len()))?;
        for word in missed.iter().take(MISSED_SHOWN) {
            let path = session.reconstruct_path(word).unwrap_or_default();
            writeln!(
                output,
                "   {:<16} {}",
                word.to_uppercase(),
                format_path(&path).bright_black()
            )?;
        }
        if missed.len() > MISSED_SHOWN {
            writeln!(output, "   … and {} more", missed.len() - MISSED_SHOWN)?;
        }
    }
    writeln!(output, "{}", "═".repeat(40).bright_cyan())
}

fn missed_for_display<D: Dictionary + ?Sized>(
    session: &Session<'_, D>,
    config: &GameConfig,
) -> Vec<String> {
    let mut missed = session.missed_words(config.min_len);
    if config.listing_filter {
        missed.retain(|w| acceptable_for_listing(w));
    }
    missed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::dictionary::Trie;
    use crate::game::SessionState;

    fn dictionary() -> Trie {
        ["sol", "sola", "made", "canon"].into_iter().collect()
    }

    fn play(session: &mut Session<'_, Trie>, config: &GameConfig, input: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_play(session, config, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn session(dictionary: &Trie) -> Session<'_, Trie> {
        let board = Board::parse("cann xcio solx made").unwrap();
        Session::new("ana", board, dictionary).unwrap()
    }

    #[test]
    fn scores_words_until_quit() {
        let dict = dictionary();
        let mut session = session(&dict);
        let config = GameConfig::default().with_duration_secs(0);
        let text = play(&mut session, &config, "sol\ncanon\n:quit\nmade\n");

        assert_eq!(session.score(), 3);
        assert_eq!(session.accepted_words(), ["sol", "canon"]);
        assert_eq!(session.state(), SessionState::Finished);
        assert!(text.contains("SOL +1"));
        assert!(text.contains("ana: 3 points, 2 words"));
    }

    #[test]
    fn reports_rejections_and_repeats() {
        let dict = dictionary();
        let mut session = session(&dict);
        let config = GameConfig::default().with_duration_secs(0);
        let text = play(&mut session, &config, "sol\nsol\ncasa\nab\n");

        assert_eq!(session.score(), 1);
        assert!(text.contains("already found"));
        assert!(text.contains("not formable on the board"));
        assert!(text.contains("too short"));
    }

    #[test]
    fn end_of_input_finishes_round() {
        let dict = dictionary();
        let mut session = session(&dict);
        let summary = play_summary(&mut session, "made");
        assert_eq!(summary.score, 1);
        assert!(session.is_finished());
    }

    fn play_summary(session: &mut Session<'_, Trie>, input: &str) -> GameSummary {
        let mut out = Vec::new();
        let config = GameConfig::default().with_duration_secs(0);
        run_play(session, &config, input.as_bytes(), &mut out).unwrap()
    }

    #[test]
    fn words_command_lists_found_words() {
        let dict = dictionary();
        let mut session = session(&dict);
        let config = GameConfig::default().with_duration_secs(0);
        let text = play(&mut session, &config, "sola\n:words\n");
        assert!(text.contains("1 word · 1 points"));
        assert!(text.contains("  sola"));
    }

    #[test]
    fn hint_reveals_longest_missing_word() {
        let dict = dictionary();
        let mut session = session(&dict);
        let config = GameConfig::default().with_duration_secs(0);
        let text = play(&mut session, &config, ":hint\n");
        assert!(text.contains("A 5-letter word starts at the highlighted C"));
    }

    #[test]
    fn missed_words_listed_at_end() {
        let dict = dictionary();
        let mut session = session(&dict);
        let config = GameConfig::default().with_duration_secs(0);
        let text = play(&mut session, &config, "canon\n");
        assert!(text.contains("Missed 3 words"));
        assert!(text.contains("SOL"));
        assert!(text.contains("(2,0) → (2,1) → (2,2)"));
    }

    #[test]
    fn words_after_deadline_are_not_scored() {
        let dict = dictionary();
        let mut session = session(&dict);
        let mut config = GameConfig::default();
        config.duration = std::time::Duration::from_millis(1);
        session.start();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let text = play(&mut session, &config, "sol\n");
        assert!(text.contains("Time's up"));
        assert_eq!(session.score(), 0);
    }
}
