//! Plain-text goal report.
//!
//! Goals are printed most recently updated first, each followed by its
//! tactics in file order. The terse view hides satisfied tactics; the verbose
//! view shows everything plus dates, intervals, description and strategy.
//!
//! ```text
//! 1. goals/karate.yaml
//!    -  Find a personal trainer.
//!    -  Train on Monday, Tuesday, Thursday and Friday.
//! ```

use std::io::Write;

use chrono::NaiveDateTime;

use crate::error::RenderResult;
use crate::goal::{Goal, Tactic};

/// Marker for a satisfied tactic.
pub const SATISFIED_GLYPH: &str = "✅";
/// Marker for an outstanding tactic, padded to the satisfied marker's width.
pub const OUTSTANDING_GLYPH: &str = "- ";

const INDENT: &str = "   ";

/// Render `goals` to `out` as seen at `now`.
///
/// Goals are sorted by recency here; the caller's order is irrelevant.
pub fn render<W: Write + ?Sized>(
    goals: &[Goal],
    verbose: bool,
    now: NaiveDateTime,
    out: &mut W,
) -> RenderResult<()> {
    let mut sorted: Vec<&Goal> = goals.iter().collect();
    sorted.sort_by(|a, b| a.cmp_recency(b));

    for (i, goal) in sorted.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        render_goal(i + 1, goal, verbose, now, out)?;
    }
    out.flush()?;
    Ok(())
}

fn render_goal<W: Write + ?Sized>(
    ordinal: usize,
    goal: &Goal,
    verbose: bool,
    now: NaiveDateTime,
    out: &mut W,
) -> RenderResult<()> {
    if verbose {
        writeln!(
            out,
            "{ordinal}. {} (updated: {})",
            goal.path(),
            goal.updated().label(now)
        )?;
        writeln!(out, "{INDENT}description: {}", goal.description())?;
        writeln!(out, "{INDENT}strategy: {}", goal.strategy())?;
    } else {
        writeln!(out, "{ordinal}. {}", goal.path())?;
    }

    if verbose {
        for tactic in goal.tactics() {
            render_tactic(tactic, tactic.is_satisfied(now), true, now, out)?;
        }
    } else {
        for tactic in goal.outstanding(now) {
            render_tactic(tactic, false, false, now, out)?;
        }
    }
    Ok(())
}

fn render_tactic<W: Write + ?Sized>(
    tactic: &Tactic,
    satisfied: bool,
    verbose: bool,
    now: NaiveDateTime,
    out: &mut W,
) -> RenderResult<()> {
    let glyph = if satisfied {
        SATISFIED_GLYPH
    } else {
        OUTSTANDING_GLYPH
    };
    if verbose {
        writeln!(
            out,
            "{INDENT}{glyph} {} (done: {}, interval: {})",
            tactic.description,
            tactic.done.label(now),
            tactic.interval
        )?;
    } else {
        writeln!(out, "{INDENT}{glyph} {}", tactic.description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::done::Done;
    use crate::interval::Interval;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 4, 27)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> Done {
        Done::On(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn render_string(goals: &[Goal], verbose: bool) -> String {
        let mut buf = Vec::new();
        render(goals, verbose, now(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn karate() -> Goal {
        Goal::new(
            "karate.yaml",
            "Black belt",
            "Train a lot",
            vec![
                Tactic::new("Find a trainer", date(2023, 4, 25), Interval::Once),
                Tactic::new("Train", Done::Never, Interval::Weekly),
            ],
        )
    }

    #[test]
    fn terse_hides_satisfied_tactics() {
        let out = render_string(&[karate()], false);
        assert_eq!(out, "1. karate.yaml\n   -  Train\n");
    }

    #[test]
    fn verbose_shows_everything() {
        let out = render_string(&[karate()], true);
        let expected = "\
1. karate.yaml (updated: 2d ago)
   description: Black belt
   strategy: Train a lot
   ✅ Find a trainer (done: 2d ago, interval: once)
   -  Train (done: never, interval: weekly)
";
        assert_eq!(out, expected);
    }

    #[test]
    fn goals_are_grouped_in_recency_order() {
        let old = Goal::new(
            "a.yaml",
            "",
            "",
            vec![Tactic::new("Old", date(2020, 1, 1), Interval::Daily)],
        );
        let out = render_string(&[old, karate()], false);
        assert_eq!(
            out,
            "1. karate.yaml\n   -  Train\n\n2. a.yaml\n   -  Old\n"
        );
    }

    #[test]
    fn goal_header_stays_when_everything_is_done() {
        let done = Goal::new(
            "done.yaml",
            "",
            "",
            vec![Tactic::new("Did it", Done::Unknown, Interval::Once)],
        );
        assert_eq!(render_string(&[done], false), "1. done.yaml\n");
    }

    #[test]
    fn no_goals_no_output() {
        assert_eq!(render_string(&[], false), "");
        assert_eq!(render_string(&[], true), "");
    }

    #[test]
    fn output_is_deterministic() {
        let goals = vec![karate(), Goal::new("b.yaml", "", "", Vec::new())];
        assert_eq!(render_string(&goals, true), render_string(&goals, true));
    }

    #[test]
    fn write_failure_is_an_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        assert!(render(&[karate()], false, now(), &mut Closed).is_err());
    }
}
