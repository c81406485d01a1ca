//! Care engine: time-based decay, cooldown gating, and care actions.
//!
//! [`PetCareEngine`] is a pure function of a [`PetState`] and the current
//! time. It never stores anything: callers load a state, hand it in together
//! with `now`, and persist whatever comes back. Serializing concurrent
//! updates to the same pet is the caller's job.
//!
//! Decay is always measured from `last_fed` / `last_played`, not from the
//! last time decay was applied, so applying it to an already decayed state
//! decays it again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CareError;
use crate::id::PetId;
use crate::pet::{MAX_STAT, Mood, Pet, PetState};
use crate::schedule::PetCareSchedule;
use crate::time::{Timestamp, hours_since, minutes_since};

/// A care action a child can perform on their pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareAction {
    Feed,
    Play,
}

impl std::fmt::Display for CareAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Feed => f.write_str("feed"),
            Self::Play => f.write_str("play"),
        }
    }
}

/// Stats after time-based decay, together with the elapsed hours they were
/// computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayedStats {
    pub happiness: u8,
    pub energy: u8,
    pub mood: Mood,
    pub hours_since_fed: i64,
    pub hours_since_played: i64,
}

/// When each action becomes available again. `None` means "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextCareTimes {
    pub feed: Option<Timestamp>,
    pub play: Option<Timestamp>,
}

/// Read-only view of a pet for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetStatus {
    pub happiness: u8,
    pub energy: u8,
    pub mood: Mood,
    pub can_feed_now: bool,
    pub can_play_now: bool,
    pub next_feeding_at: Option<Timestamp>,
    pub next_play_at: Option<Timestamp>,
}

/// Stateless pet-care engine parameterised by a [`PetCareSchedule`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PetCareEngine {
    schedule: PetCareSchedule,
}

impl PetCareEngine {
    /// Create an engine running on the given schedule.
    #[must_use]
    pub fn new(schedule: PetCareSchedule) -> Self {
        Self { schedule }
    }

    #[must_use]
    pub fn schedule(&self) -> &PetCareSchedule {
        &self.schedule
    }

    /// Compute happiness, energy, and mood after the time elapsed since the
    /// last feeding and play session.
    #[must_use]
    pub fn apply_decay(&self, state: &PetState, now: Timestamp) -> DecayedStats {
        let hours_since_fed = hours_since(state.last_fed, now);
        let hours_since_played = hours_since(state.last_played, now);

        let happiness_decay = hours_since_played
            .saturating_mul(i64::from(self.schedule.happiness_decay_per_hour))
            .max(0);
        let happiness = clamp_stat(i64::from(state.happiness) - happiness_decay);

        let asleep_and_fed = state.energy < self.schedule.sleep_energy_threshold
            && hours_since_fed < i64::from(self.schedule.well_fed_hours);
        let energy = if asleep_and_fed {
            // Capped at zero by `min`: sleeping never adds energy.
            let regen = hours_since_fed
                .saturating_mul(i64::from(self.schedule.sleep_regen_per_hour))
                .min(0);
            clamp_stat(i64::from(state.energy) + regen)
        } else {
            let decay = hours_since_fed
                .saturating_mul(i64::from(self.schedule.energy_decay_per_hour))
                .max(0);
            clamp_stat(i64::from(state.energy) - decay)
        };

        DecayedStats {
            happiness,
            energy,
            mood: Mood::from_stats(happiness, energy, hours_since_fed, hours_since_played),
            hours_since_fed,
            hours_since_played,
        }
    }

    /// Whether the feed cooldown has elapsed.
    #[must_use]
    pub fn can_feed(&self, last_fed: Timestamp, now: Timestamp) -> bool {
        self.cooldown_elapsed(CareAction::Feed, last_fed, now)
    }

    /// Whether the play cooldown has elapsed.
    #[must_use]
    pub fn can_play(&self, last_played: Timestamp, now: Timestamp) -> bool {
        self.cooldown_elapsed(CareAction::Play, last_played, now)
    }

    /// Next time each action is allowed, or `None` if it is allowed now.
    /// Informational only; the actions gate themselves. A cooldown ending
    /// past the representable range reports [`DateTime::MAX_UTC`].
    #[must_use]
    pub fn next_care_time(
        &self,
        last_fed: Timestamp,
        last_played: Timestamp,
        now: Timestamp,
    ) -> NextCareTimes {
        NextCareTimes {
            feed: self.next_time(CareAction::Feed, last_fed, now),
            play: self.next_time(CareAction::Play, last_played, now),
        }
    }

    /// Multiplier applied to an action's effects depending on how the time
    /// since the last such action compares to its cooldown.
    ///
    /// | elapsed / cooldown | bonus |
    /// |--------------------|-------|
    /// | `< 0.8`            | 0.5   |
    /// | `0.8 ..= 1.5`      | 1.0   |
    /// | `1.5 <.. 3.0`      | 1.2   |
    /// | `> 3.0`            | 1.5   |
    ///
    /// The first tier is unreachable through [`feed`](Self::feed) and
    /// [`play`](Self::play), which reject anything below the cooldown.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn care_bonus(&self, minutes_since_last_care: i64, action: CareAction) -> f64 {
        let window = f64::from(self.schedule.cooldown_minutes(action));
        let ratio = minutes_since_last_care as f64 / window;
        if ratio < 0.8 {
            0.5
        } else if ratio <= 1.5 {
            1.0
        } else if ratio <= 3.0 {
            1.2
        } else {
            1.5
        }
    }

    /// Feed the pet.
    ///
    /// # Errors
    ///
    /// Returns [`CareError::TooSoon`] if the feed cooldown has not elapsed.
    pub fn feed(&self, state: &PetState, now: Timestamp) -> Result<PetState, CareError> {
        let minutes_since_fed = self.check_cooldown(CareAction::Feed, state.last_fed, now)?;
        let decayed = self.apply_decay(state, now);
        let bonus = self.care_bonus(minutes_since_fed, CareAction::Feed);

        let happiness_gain = scale(self.schedule.feed_happiness_gain, bonus);
        let energy_gain = scale(self.schedule.feed_energy_gain, bonus);
        let happiness = clamp_stat(i64::from(decayed.happiness) + happiness_gain);
        let energy = clamp_stat(i64::from(decayed.energy) + energy_gain);

        Ok(PetState {
            happiness,
            energy,
            // The play-recency argument receives minutes since the last
            // feeding, not hours since the last play session.
            mood: Mood::from_stats(happiness, energy, 0, minutes_since_fed),
            last_fed: now.max(state.last_fed),
            last_played: state.last_played,
            xp: state.xp,
        })
    }

    /// Play with the pet.
    ///
    /// # Errors
    ///
    /// Returns [`CareError::TooSoon`] if the play cooldown has not elapsed,
    /// or [`CareError::TooTired`] if energy after decay is below the
    /// schedule's play threshold.
    pub fn play(&self, state: &PetState, now: Timestamp) -> Result<PetState, CareError> {
        let minutes_since_played = self.check_cooldown(CareAction::Play, state.last_played, now)?;
        let decayed = self.apply_decay(state, now);
        if decayed.energy < self.schedule.min_play_energy {
            return Err(CareError::TooTired {
                energy: decayed.energy,
            });
        }

        let bonus = self.care_bonus(minutes_since_played, CareAction::Play);
        let happiness_gain = scale(self.schedule.play_happiness_gain, bonus);
        let energy_cost = round_to_i64(f64::from(self.schedule.play_energy_cost) / bonus);
        let happiness = clamp_stat(i64::from(decayed.happiness) + happiness_gain);
        let energy = clamp_stat(i64::from(decayed.energy) - energy_cost);
        let xp_gain = scale(self.schedule.play_xp_gain, bonus).unsigned_abs();

        Ok(PetState {
            happiness,
            energy,
            mood: Mood::from_stats(happiness, energy, 0, 0),
            last_fed: state.last_fed,
            last_played: now.max(state.last_played),
            xp: state.xp.saturating_add(xp_gain),
        })
    }

    /// Current stats and action availability, without changing anything.
    #[must_use]
    pub fn peek_status(&self, state: &PetState, now: Timestamp) -> PetStatus {
        let decayed = self.apply_decay(state, now);
        let next = self.next_care_time(state.last_fed, state.last_played, now);
        PetStatus {
            happiness: decayed.happiness,
            energy: decayed.energy,
            mood: decayed.mood,
            can_feed_now: next.feed.is_none(),
            can_play_now: next.play.is_none(),
            next_feeding_at: next.feed,
            next_play_at: next.play,
        }
    }

    /// Apply decay to a full state, returning it only if happiness, energy,
    /// or mood changed. Timestamps and xp are carried over untouched.
    #[must_use]
    pub fn decay_state(&self, state: &PetState, now: Timestamp) -> Option<PetState> {
        let decayed = self.apply_decay(state, now);
        let next = PetState {
            happiness: decayed.happiness,
            energy: decayed.energy,
            mood: decayed.mood,
            ..state.clone()
        };
        next.stats_differ(state).then_some(next)
    }

    /// Decay every pet, returning the new state of those that changed.
    #[must_use]
    pub fn sweep_decay(&self, pets: &[Pet], now: Timestamp) -> Vec<(PetId, PetState)> {
        pets.iter()
            .filter_map(|pet| self.decay_state(&pet.state, now).map(|state| (pet.id, state)))
            .collect()
    }

    fn cooldown_elapsed(&self, action: CareAction, last: Timestamp, now: Timestamp) -> bool {
        minutes_since(last, now) >= i64::from(self.schedule.cooldown_minutes(action))
    }

    fn next_time(&self, action: CareAction, last: Timestamp, now: Timestamp) -> Option<Timestamp> {
        if self.cooldown_elapsed(action, last, now) {
            None
        } else {
            let cooldown = i64::from(self.schedule.cooldown_minutes(action));
            Some(
                last.checked_add_signed(chrono::Duration::minutes(cooldown))
                    .unwrap_or(DateTime::<Utc>::MAX_UTC),
            )
        }
    }

    /// Minutes since `last` if the cooldown of `action` has elapsed.
    fn check_cooldown(
        &self,
        action: CareAction,
        last: Timestamp,
        now: Timestamp,
    ) -> Result<i64, CareError> {
        let minutes = minutes_since(last, now);
        let cooldown = i64::from(self.schedule.cooldown_minutes(action));
        if minutes < cooldown {
            return Err(CareError::TooSoon {
                action,
                minutes_remaining: cooldown - minutes,
            });
        }
        Ok(minutes)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_stat(value: i64) -> u8 {
    value.clamp(0, i64::from(MAX_STAT)) as u8
}

fn scale(base: u32, factor: f64) -> i64 {
    round_to_i64(f64::from(base) * factor)
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ChildId;
    use chrono::{Duration, TimeZone};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 10, 18, 0, 0).unwrap()
    }

    fn state(happiness: u8, energy: u8, fed_ago: Duration, played_ago: Duration) -> PetState {
        PetState {
            happiness,
            energy,
            mood: Mood::Neutral,
            last_fed: now() - fed_ago,
            last_played: now() - played_ago,
            xp: 10,
        }
    }

    fn engine() -> PetCareEngine {
        PetCareEngine::default()
    }

    // ── decay ──────────────────────────────────────────────────────

    #[test]
    fn should_decay_both_stats_per_elapsed_hour() {
        let s = state(50, 50, Duration::hours(3), Duration::hours(3));
        let decayed = engine().apply_decay(&s, now());
        assert_eq!(decayed.happiness, 44);
        assert_eq!(decayed.energy, 41);
        assert_eq!(decayed.mood, Mood::Neutral);
        assert_eq!(decayed.hours_since_fed, 3);
        assert_eq!(decayed.hours_since_played, 3);
    }

    #[test]
    fn should_ignore_partial_hours_when_decaying() {
        let s = state(50, 50, Duration::minutes(59), Duration::minutes(119));
        let decayed = engine().apply_decay(&s, now());
        assert_eq!(decayed.happiness, 48);
        assert_eq!(decayed.energy, 50);
    }

    #[test]
    fn should_not_regenerate_energy_while_sleeping_and_well_fed() {
        let s = state(50, 25, Duration::hours(3), Duration::zero());
        let decayed = engine().apply_decay(&s, now());
        assert_eq!(decayed.energy, 25);
    }

    #[test]
    fn should_decay_low_energy_when_not_well_fed() {
        let s = state(50, 25, Duration::hours(4), Duration::zero());
        let decayed = engine().apply_decay(&s, now());
        assert_eq!(decayed.energy, 13);
        assert_eq!(decayed.mood, Mood::Sleeping);
    }

    #[test]
    fn should_clamp_decayed_stats_at_zero() {
        let s = state(5, 5, Duration::hours(100), Duration::hours(100));
        let decayed = engine().apply_decay(&s, now());
        assert_eq!(decayed.happiness, 0);
        assert_eq!(decayed.energy, 0);
    }

    #[test]
    fn should_not_decay_when_timestamps_are_in_the_future() {
        let s = state(50, 50, -Duration::hours(2), -Duration::hours(2));
        let decayed = engine().apply_decay(&s, now());
        assert_eq!(decayed.happiness, 50);
        assert_eq!(decayed.energy, 50);
    }

    #[test]
    fn should_be_deterministic_for_identical_inputs() {
        let s = state(63, 47, Duration::minutes(421), Duration::minutes(77));
        assert_eq!(
            engine().apply_decay(&s, now()),
            engine().apply_decay(&s, now())
        );
    }

    #[test]
    fn should_mark_sad_when_play_is_stale_even_with_average_stats() {
        let s = state(60, 90, Duration::hours(1), Duration::hours(7));
        let decayed = engine().apply_decay(&s, now());
        assert_eq!(decayed.happiness, 46);
        assert_eq!(decayed.mood, Mood::Sad);
    }

    #[test]
    fn should_saturate_decay_with_extreme_rates_and_spans() {
        let e = PetCareEngine::new(PetCareSchedule {
            happiness_decay_per_hour: u32::MAX,
            energy_decay_per_hour: u32::MAX,
            ..PetCareSchedule::default()
        });
        let s = PetState {
            last_fed: DateTime::<Utc>::MIN_UTC,
            last_played: DateTime::<Utc>::MIN_UTC,
            ..state(90, 90, Duration::zero(), Duration::zero())
        };

        let decayed = e.apply_decay(&s, DateTime::<Utc>::MAX_UTC);

        assert_eq!(decayed.happiness, 0);
        assert_eq!(decayed.energy, 0);
        assert_eq!(decayed.mood, Mood::Sleeping);
    }

    // ── cooldowns ──────────────────────────────────────────────────

    #[test]
    fn should_allow_feed_exactly_at_cooldown_boundary() {
        let e = engine();
        assert!(e.can_feed(now() - Duration::minutes(120), now()));
        assert!(!e.can_feed(now() - Duration::minutes(119), now()));
    }

    #[test]
    fn should_allow_play_after_one_hour() {
        let e = engine();
        assert!(e.can_play(now() - Duration::minutes(60), now()));
        assert!(!e.can_play(now() - Duration::seconds(59 * 60 + 59), now()));
    }

    #[test]
    fn should_report_next_care_time_only_for_blocked_actions() {
        let last_fed = now() - Duration::minutes(30);
        let last_played = now() - Duration::minutes(90);
        let next = engine().next_care_time(last_fed, last_played, now());
        assert_eq!(next.feed, Some(last_fed + Duration::minutes(120)));
        assert_eq!(next.play, None);
    }

    #[test]
    fn should_report_max_time_when_cooldown_ends_past_representable_range() {
        let end = DateTime::<Utc>::MAX_UTC;
        let last_fed = end - Duration::minutes(30);
        let next = engine().next_care_time(last_fed, end - Duration::hours(2), end);
        assert_eq!(next.feed, Some(end));
        assert_eq!(next.play, None);

        let s = PetState {
            last_fed,
            ..state(50, 50, Duration::zero(), Duration::zero())
        };
        let status = engine().peek_status(&s, end);
        assert!(!status.can_feed_now);
        assert_eq!(status.next_feeding_at, Some(end));
    }

    // ── bonus ──────────────────────────────────────────────────────

    #[test]
    fn should_pick_bonus_tier_from_ratio_to_cooldown() {
        let e = engine();
        assert!((e.care_bonus(95, CareAction::Feed) - 0.5).abs() < f64::EPSILON);
        assert!((e.care_bonus(96, CareAction::Feed) - 1.0).abs() < f64::EPSILON);
        assert!((e.care_bonus(180, CareAction::Feed) - 1.0).abs() < f64::EPSILON);
        assert!((e.care_bonus(181, CareAction::Feed) - 1.2).abs() < f64::EPSILON);
        assert!((e.care_bonus(360, CareAction::Feed) - 1.2).abs() < f64::EPSILON);
        assert!((e.care_bonus(361, CareAction::Feed) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_use_play_cooldown_as_play_window() {
        let e = engine();
        assert!((e.care_bonus(60, CareAction::Play) - 1.0).abs() < f64::EPSILON);
        assert!((e.care_bonus(120, CareAction::Play) - 1.2).abs() < f64::EPSILON);
        assert!((e.care_bonus(181, CareAction::Play) - 1.5).abs() < f64::EPSILON);
    }

    // ── feed ───────────────────────────────────────────────────────

    #[test]
    fn should_feed_with_neutral_bonus_at_cooldown_boundary() {
        let s = state(50, 50, Duration::minutes(120), Duration::minutes(120));
        let fed = engine().feed(&s, now()).unwrap();
        // 2h decay (-4 / -6) then +15 / +10
        assert_eq!(fed.happiness, 61);
        assert_eq!(fed.energy, 54);
        assert_eq!(fed.mood, Mood::Happy);
        assert_eq!(fed.last_fed, now());
        assert_eq!(fed.last_played, s.last_played);
        assert_eq!(fed.xp, s.xp);
    }

    #[test]
    fn should_reject_feed_one_minute_before_cooldown() {
        let s = state(50, 50, Duration::minutes(119), Duration::zero());
        let err = engine().feed(&s, now()).unwrap_err();
        assert_eq!(
            err,
            CareError::TooSoon {
                action: CareAction::Feed,
                minutes_remaining: 1
            }
        );
    }

    #[test]
    fn should_reject_second_feed_right_after_first() {
        let e = engine();
        let s = state(50, 50, Duration::hours(3), Duration::zero());
        let fed = e.feed(&s, now()).unwrap();
        let err = e.feed(&fed, now()).unwrap_err();
        assert_eq!(
            err,
            CareError::TooSoon {
                action: CareAction::Feed,
                minutes_remaining: 120
            }
        );
    }

    #[test]
    fn should_scale_feed_gains_by_late_bonus_and_clamp_at_max() {
        let s = state(95, 98, Duration::hours(10), Duration::zero());
        let fed = engine().feed(&s, now()).unwrap();
        // bonus 1.5: +23 happiness (clamped), energy 98 - 30 + 15
        assert_eq!(fed.happiness, 100);
        assert_eq!(fed.energy, 83);
    }

    #[test]
    fn should_treat_minutes_since_fed_as_play_staleness_in_feed_mood() {
        let s = state(30, 50, Duration::minutes(130), Duration::minutes(10));
        let fed = engine().feed(&s, now()).unwrap();
        assert_eq!(fed.happiness, 45);
        assert_eq!(fed.energy, 54);
        assert_eq!(fed.mood, Mood::Sad);
    }

    // ── play ───────────────────────────────────────────────────────

    #[test]
    fn should_play_with_neutral_bonus_after_cooldown() {
        let s = state(50, 80, Duration::hours(1), Duration::hours(1));
        let played = engine().play(&s, now()).unwrap();
        // 1h decay (-2 / -3) then +20 / -15
        assert_eq!(played.happiness, 68);
        assert_eq!(played.energy, 62);
        assert_eq!(played.mood, Mood::Happy);
        assert_eq!(played.last_played, now());
        assert_eq!(played.last_fed, s.last_fed);
        assert_eq!(played.xp, 15);
    }

    #[test]
    fn should_lower_play_energy_cost_with_better_timing() {
        let s = state(50, 80, Duration::hours(2), Duration::hours(2));
        let played = engine().play(&s, now()).unwrap();
        // bonus 1.2: +24 happiness, cost round(12.5) = 13, xp +6
        assert_eq!(played.happiness, 70);
        assert_eq!(played.energy, 61);
        assert_eq!(played.xp, 16);
    }

    #[test]
    fn should_apply_max_bonus_after_long_absence() {
        let s = state(50, 80, Duration::hours(1), Duration::hours(4));
        let played = engine().play(&s, now()).unwrap();
        // 4h happiness decay -8, 1h energy decay -3; bonus 1.5: +30, cost 10, xp +8
        assert_eq!(played.happiness, 72);
        assert_eq!(played.energy, 67);
        assert_eq!(played.xp, 18);
    }

    #[test]
    fn should_reject_play_before_cooldown() {
        let s = state(50, 80, Duration::hours(1), Duration::minutes(59));
        let err = engine().play(&s, now()).unwrap_err();
        assert_eq!(
            err,
            CareError::TooSoon {
                action: CareAction::Play,
                minutes_remaining: 1
            }
        );
    }

    #[test]
    fn should_reject_play_when_too_tired_after_decay() {
        let s = state(50, 15, Duration::hours(1), Duration::hours(2));
        let err = engine().play(&s, now()).unwrap_err();
        assert_eq!(err, CareError::TooTired { energy: 15 });
    }

    #[test]
    fn should_reject_play_when_decay_drops_energy_below_threshold() {
        let s = state(50, 40, Duration::hours(7), Duration::hours(2));
        let err = engine().play(&s, now()).unwrap_err();
        assert_eq!(err, CareError::TooTired { energy: 19 });
    }

    #[test]
    fn should_keep_stats_within_bounds_after_any_action() {
        let e = engine();
        for happiness in (0..=100).step_by(10) {
            for energy in (0..=100).step_by(10) {
                for hours in [2, 5, 30] {
                    let s = state(
                        happiness,
                        energy,
                        Duration::hours(hours),
                        Duration::hours(hours),
                    );
                    let decayed = e.apply_decay(&s, now());
                    assert!(decayed.happiness <= MAX_STAT && decayed.energy <= MAX_STAT);
                    for next in [e.feed(&s, now()), e.play(&s, now())].into_iter().flatten() {
                        assert!(next.happiness <= MAX_STAT);
                        assert!(next.energy <= MAX_STAT);
                    }
                }
            }
        }
    }

    // ── status & sweep ─────────────────────────────────────────────

    #[test]
    fn should_peek_decayed_status_without_mutating() {
        let s = state(50, 50, Duration::minutes(30), Duration::hours(3));
        let status = engine().peek_status(&s, now());
        assert_eq!(status.happiness, 44);
        assert_eq!(status.energy, 50);
        assert!(!status.can_feed_now);
        assert!(status.can_play_now);
        assert_eq!(status.next_feeding_at, Some(s.last_fed + Duration::hours(2)));
        assert_eq!(status.next_play_at, None);
        assert_eq!(s.happiness, 50);
    }

    #[test]
    fn should_sweep_only_pets_whose_stats_changed() {
        let fresh = Pet::builder()
            .child_id(ChildId::new())
            .name("Fresh")
            .born_at(now())
            .build()
            .unwrap();
        let neglected = Pet::builder()
            .name("Neglected")
            .state(state(70, 70, Duration::hours(5), Duration::hours(5)))
            .build()
            .unwrap();

        let changed = engine().sweep_decay(&[fresh, neglected.clone()], now());

        assert_eq!(changed.len(), 1);
        let (id, new_state) = &changed[0];
        assert_eq!(*id, neglected.id);
        assert_eq!(new_state.happiness, 60);
        assert_eq!(new_state.energy, 55);
        assert_eq!(new_state.last_fed, neglected.state.last_fed);
        assert_eq!(new_state.xp, neglected.state.xp);
    }

    #[test]
    fn should_report_mood_only_change_as_changed() {
        let mut s = state(50, 50, Duration::minutes(10), Duration::minutes(10));
        s.mood = Mood::Excited;
        let next = engine().decay_state(&s, now()).unwrap();
        assert_eq!(next.mood, Mood::Neutral);
        assert_eq!(next.happiness, 50);
    }

    #[test]
    fn should_honour_custom_schedule() {
        let e = PetCareEngine::new(PetCareSchedule {
            feed_cooldown_minutes: 10,
            energy_decay_per_hour: 0,
            ..PetCareSchedule::default()
        });
        let s = state(50, 50, Duration::minutes(10), Duration::zero());
        let fed = e.feed(&s, now()).unwrap();
        assert_eq!(fed.energy, 60);
    }
}
