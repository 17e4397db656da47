//! Sample goal document shown by `goal --example`.

/// A complete goal file exercising every field and default.
pub const EXAMPLE: &str = "\
description: Become a black belt martial artist in under five years.
strategy: Get a personal trainer and train consistently over the next five years.
tactics:
- do: Find an online community to share ideas and get tips.
  done: 0001-01-01 # same as leaving it out
  interval: once # can be left out too
- do: Find a personal trainer.
- do: Have a health/diet plan focused on mind, body and spirit.
  done: 1970-01-01
- do: Meditate daily 10 - 30 minutes.
  done: 2023-04-25 # expires a day later because of the daily interval
  interval: daily
- do: Train on Monday, Tuesday, Thursday and Friday (2 hours per session).
  interval: weekly
";
