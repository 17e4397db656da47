//! Goals and their tactics.
//!
//! A goal is where you want to get; its strategy is the high-level plan and
//! its tactics are the concrete, possibly recurring, actions implementing it.
//! Both are read-only once loaded. A goal's `updated` date is derived from its
//! tactics at construction and drives the report order.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::done::Done;
use crate::interval::Interval;

/// One concrete action supporting a goal's strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tactic {
    /// What to do.
    pub description: String,
    /// When it was last done.
    pub done: Done,
    /// How long a completion stays valid.
    pub interval: Interval,
}

impl Tactic {
    pub fn new(description: impl Into<String>, done: Done, interval: Interval) -> Self {
        Self {
            description: description.into(),
            done,
            interval,
        }
    }

    /// Whether the last completion still counts at `now`.
    ///
    /// A one-off tactic is satisfied by any completion, dated or not. A
    /// recurring tactic needs a dated completion younger than its window.
    pub fn is_satisfied(&self, now: NaiveDateTime) -> bool {
        match self.interval.window() {
            None => self.done != Done::Never,
            Some(window) => match self.done.elapsed(now) {
                Some(elapsed) => elapsed < window,
                None => false,
            },
        }
    }
}

/// A goal loaded from one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    path: String,
    description: String,
    strategy: String,
    tactics: Vec<Tactic>,
    updated: Done,
}

impl Goal {
    pub fn new(
        path: impl Into<String>,
        description: impl Into<String>,
        strategy: impl Into<String>,
        tactics: Vec<Tactic>,
    ) -> Self {
        let updated = last_update(&tactics);
        Self {
            path: path.into(),
            description: description.into(),
            strategy: strategy.into(),
            tactics,
            updated,
        }
    }

    /// Source identifier; doubles as the display name.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// High-level plan to reach the goal.
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Tactics in file order.
    pub fn tactics(&self) -> &[Tactic] {
        &self.tactics
    }

    /// Most recent dated completion across all tactics, or `Never`.
    pub fn updated(&self) -> Done {
        self.updated
    }

    /// Tactics not satisfied at `now`, in file order.
    pub fn outstanding(&self, now: NaiveDateTime) -> impl Iterator<Item = &Tactic> {
        self.tactics.iter().filter(move |t| !t.is_satisfied(now))
    }

    /// Report order: most recently updated first, then by path.
    ///
    /// Goals without a dated completion sort after all dated ones.
    pub fn cmp_recency(&self, other: &Self) -> Ordering {
        other
            .updated
            .date()
            .cmp(&self.updated.date())
            .then_with(|| self.path.cmp(&other.path))
    }
}

fn last_update(tactics: &[Tactic]) -> Done {
    tactics
        .iter()
        .filter_map(|t| t.done.date())
        .max()
        .map_or(Done::Never, Done::On)
}

/// Sort goals into report order.
pub fn sort_by_recency(goals: &mut [Goal]) {
    goals.sort_by(Goal::cmp_recency);
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Late in the evening, so `now - 23h` still falls on the same day.
    fn now() -> NaiveDateTime {
        date(2023, 4, 27).and_hms_opt(23, 0, 0).unwrap()
    }

    fn done_before(delta: TimeDelta) -> Done {
        Done::On((now() - delta).date())
    }

    fn goal(path: &str, dates: &[Done]) -> Goal {
        let tactics = dates
            .iter()
            .map(|d| Tactic::new("do it", *d, Interval::Once))
            .collect();
        Goal::new(path, "", "", tactics)
    }

    #[test]
    fn once_needs_any_completion() {
        assert!(!Tactic::new("a", Done::Never, Interval::Once).is_satisfied(now()));
        assert!(Tactic::new("a", Done::Unknown, Interval::Once).is_satisfied(now()));
        assert!(Tactic::new("a", Done::On(date(1970, 1, 1)), Interval::Once).is_satisfied(now()));
    }

    #[test]
    fn daily_window() {
        let fresh = Tactic::new("a", done_before(TimeDelta::hours(23)), Interval::Daily);
        let stale = Tactic::new("a", done_before(TimeDelta::hours(25)), Interval::Daily);
        assert!(fresh.is_satisfied(now()));
        assert!(!stale.is_satisfied(now()));
    }

    #[test]
    fn window_end_is_exclusive() {
        let daily = Tactic::new("a", Done::On(date(2023, 4, 27)), Interval::Daily);
        let last_second = date(2023, 4, 27).and_hms_opt(23, 59, 59).unwrap();
        let next_midnight = date(2023, 4, 28).and_hms_opt(0, 0, 0).unwrap();
        assert!(daily.is_satisfied(last_second));
        assert!(!daily.is_satisfied(next_midnight));

        let weekly = Tactic::new("a", Done::On(date(2023, 4, 20)), Interval::Weekly);
        assert!(!weekly.is_satisfied(date(2023, 4, 27).and_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn weekly_window() {
        let fresh = Tactic::new("a", done_before(TimeDelta::days(6)), Interval::Weekly);
        let stale = Tactic::new("a", done_before(TimeDelta::days(8)), Interval::Weekly);
        assert!(fresh.is_satisfied(now()));
        assert!(!stale.is_satisfied(now()));
    }

    #[test]
    fn monthly_is_thirty_days() {
        let fresh = Tactic::new("a", done_before(TimeDelta::days(29)), Interval::Monthly);
        let stale = Tactic::new("a", done_before(TimeDelta::days(31)), Interval::Monthly);
        assert!(fresh.is_satisfied(now()));
        assert!(!stale.is_satisfied(now()));
    }

    #[test]
    fn recurring_needs_a_date() {
        for interval in [Interval::Daily, Interval::Weekly, Interval::Monthly] {
            assert!(!Tactic::new("a", Done::Never, interval).is_satisfied(now()));
            assert!(!Tactic::new("a", Done::Unknown, interval).is_satisfied(now()));
        }
    }

    #[test]
    fn updated_is_latest_dated_completion() {
        let g = goal(
            "g.yaml",
            &[
                Done::On(date(2023, 1, 1)),
                Done::On(date(2023, 3, 1)),
                Done::Never,
                Done::Unknown,
            ],
        );
        assert_eq!(g.updated(), Done::On(date(2023, 3, 1)));
    }

    #[test]
    fn updated_without_dates_is_never() {
        assert_eq!(goal("g.yaml", &[]).updated(), Done::Never);
        assert_eq!(
            goal("g.yaml", &[Done::Unknown, Done::Never]).updated(),
            Done::Never
        );
    }

    #[test]
    fn sort_newest_first_then_path() {
        let mut goals = vec![
            goal("c.yaml", &[Done::Never]),
            goal("b.yaml", &[Done::On(date(2023, 1, 1))]),
            goal("a.yaml", &[Done::Unknown]),
            goal("d.yaml", &[Done::On(date(2023, 3, 1))]),
            goal("a2.yaml", &[Done::On(date(2023, 1, 1))]),
        ];
        sort_by_recency(&mut goals);
        let order: Vec<&str> = goals.iter().map(|g| g.path()).collect();
        assert_eq!(order, ["d.yaml", "a2.yaml", "b.yaml", "a.yaml", "c.yaml"]);
    }

    #[test]
    fn equal_updates_break_ties_by_path() {
        let mut goals = vec![
            goal("b.yaml", &[Done::On(date(2023, 1, 1))]),
            goal("a.yaml", &[Done::On(date(2023, 1, 1))]),
        ];
        sort_by_recency(&mut goals);
        assert_eq!(goals[0].path(), "a.yaml");
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut goals = vec![
            goal("x.yaml", &[Done::On(date(2022, 6, 1))]),
            goal("y.yaml", &[]),
            goal("z.yaml", &[Done::On(date(2023, 6, 1))]),
        ];
        sort_by_recency(&mut goals);
        let once = goals.clone();
        sort_by_recency(&mut goals);
        assert_eq!(goals, once);
    }

    #[test]
    fn outstanding_keeps_file_order() {
        let g = Goal::new(
            "g.yaml",
            "",
            "",
            vec![
                Tactic::new("first", Done::Never, Interval::Once),
                Tactic::new("done", Done::Unknown, Interval::Once),
                Tactic::new("second", Done::Never, Interval::Daily),
            ],
        );
        let open: Vec<&str> = g
            .outstanding(now())
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(open, ["first", "second"]);
    }
}
