//! Deck and round state machine.
//!
//! A [`Session`] owns the shuffled deck, the pointer to the current card, the
//! round phase and the running tallies. The presentation layer feeds it user
//! intents and a one-second tick, and renders the [`RoundSnapshot`] it
//! exposes after every transition.
//!
//! Transitions are total: calling `get`, `skip`, `slip` or `tick` outside of a
//! running round does nothing.

use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::config::SessionConfig;
use crate::corpus::Corpus;
use crate::mode::ModeSettings;
use crate::scoring::RoundSummary;
use crate::shuffle::shuffle;
use crate::swipe::LOW_TIME_SECONDS;
use crate::timer::{RoundTimer, TimerTicket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Phase {
    /// Timer frozen at the full round length.
    NotStarted,
    /// Timer counting down. `time_left` is never zero here: reaching zero
    /// ends the round in the same transition.
    Running { time_left: u32 },
}

/// User intents forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Start,
    Get,
    Skip,
    Slip,
    Reset,
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Ignored,
    Ticking { time_left: u32 },
    RoundEnded(RoundSummary),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    got: u32,
    skipped: u32,
    slipped: u32,
}

/// Immutable view of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub current_card: Option<Card>,
    pub time_left: u32,
    pub started: bool,
    pub got: u32,
    pub skipped: u32,
    pub slipped: u32,
    pub points: i64,
    pub card_index: usize,
    pub deck_length: usize,
    pub low_time: bool,
}

#[derive(Debug, Clone)]
pub struct Session<R = ChaCha8Rng> {
    corpus: Corpus,
    settings: ModeSettings,
    deck: Vec<Card>,
    card_index: usize,
    phase: Phase,
    tally: Tally,
    timer: RoundTimer,
    rng: R,
}

impl Session<ChaCha8Rng> {
    pub fn new(corpus: Corpus, settings: ModeSettings) -> Self {
        Self::with_rng(corpus, settings, ChaCha8Rng::from_os_rng())
    }

    pub fn seeded(corpus: Corpus, settings: ModeSettings, seed: u64) -> Self {
        Self::with_rng(corpus, settings, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_config(corpus: Corpus, config: &SessionConfig) -> Self {
        let settings = ModeSettings::for_mode(config.mode_id());
        match config.seed {
            Some(seed) => Self::seeded(corpus, settings, seed),
            None => Self::new(corpus, settings),
        }
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(corpus: Corpus, settings: ModeSettings, mut rng: R) -> Self {
        let deck = shuffle(corpus.cards(), &mut rng);
        Self {
            corpus,
            settings,
            deck,
            card_index: 0,
            phase: Phase::NotStarted,
            tally: Tally::default(),
            timer: RoundTimer::new(),
            rng,
        }
    }

    pub fn settings(&self) -> ModeSettings {
        self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn time_left(&self) -> u32 {
        match self.phase {
            Phase::NotStarted => self.settings.round_length(),
            Phase::Running { time_left } => time_left,
        }
    }

    pub fn got(&self) -> u32 {
        self.tally.got
    }

    pub fn skipped(&self) -> u32 {
        self.tally.skipped
    }

    pub fn slipped(&self) -> u32 {
        self.tally.slipped
    }

    pub fn card_index(&self) -> usize {
        self.card_index
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn current_card(&self) -> Option<&Card> {
        if self.deck.is_empty() {
            return None;
        }
        self.deck.get(self.card_index % self.deck.len())
    }

    /// Ticket of the live round timer, `None` while no round is running.
    pub fn timer_ticket(&self) -> Option<TimerTicket> {
        self.timer.ticket()
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary::new(
            self.tally.got,
            self.tally.skipped,
            self.tally.slipped,
            self.settings.points_per_correct,
        )
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let time_left = self.time_left();
        RoundSnapshot {
            current_card: self.current_card().cloned(),
            time_left,
            started: self.is_started(),
            got: self.tally.got,
            skipped: self.tally.skipped,
            slipped: self.tally.slipped,
            points: self.summary().points,
            card_index: self.card_index,
            deck_length: self.deck.len(),
            low_time: self.is_started() && time_left <= LOW_TIME_SECONDS,
        }
    }

    /// Starts a round and hands out the ticket for its timer. Returns `None`
    /// if a round is already running or there are no cards to play.
    pub fn start(&mut self) -> Option<TimerTicket> {
        if self.is_started() {
            return None;
        }
        if self.deck.is_empty() {
            warn!("cannot start a round without cards");
            return None;
        }

        self.tally = Tally::default();
        self.phase = Phase::Running {
            time_left: self.settings.round_length(),
        };
        let ticket = self.timer.acquire();
        info!(
            "round started: {}s, timer generation {}",
            self.time_left(),
            ticket.generation()
        );
        Some(ticket)
    }

    pub fn get(&mut self) -> bool {
        if !self.is_started() {
            return false;
        }
        self.tally.got += 1;
        self.advance();
        true
    }

    pub fn skip(&mut self) -> bool {
        if !self.is_started() {
            return false;
        }
        self.tally.skipped += 1;
        self.advance();
        true
    }

    /// A forbidden word was said: counts against the team and burns the card.
    pub fn slip(&mut self) -> bool {
        if !self.is_started() {
            return false;
        }
        self.tally.slipped += 1;
        self.advance();
        true
    }

    fn advance(&mut self) {
        let next = self.card_index + 1;
        if next >= self.deck.len() {
            debug!("deck exhausted after {} cards, reshuffling", self.deck.len());
            self.reshuffle();
        } else {
            self.card_index = next;
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        let Phase::Running { time_left } = self.phase else {
            return TickOutcome::Ignored;
        };

        let time_left = time_left.saturating_sub(1);
        if time_left == 0 {
            return TickOutcome::RoundEnded(self.end_round());
        }

        self.phase = Phase::Running { time_left };
        TickOutcome::Ticking { time_left }
    }

    /// Ticks only if `ticket` belongs to the running round.
    pub fn tick_with(&mut self, ticket: TimerTicket) -> TickOutcome {
        if !self.timer.is_current(ticket) {
            warn!("ignoring tick from stale timer generation {}", ticket.generation());
            return TickOutcome::Ignored;
        }
        self.tick()
    }

    /// Feeds `dt` seconds of host time, ticking once per whole second.
    /// Returns the outcome of the last tick.
    pub fn advance_clock(&mut self, dt: f64) -> TickOutcome {
        let mut outcome = TickOutcome::Ignored;
        for _ in 0..self.timer.accumulate(dt) {
            outcome = self.tick();
            if matches!(outcome, TickOutcome::RoundEnded(_)) {
                break;
            }
        }
        outcome
    }

    fn end_round(&mut self) -> RoundSummary {
        let summary = self.summary();
        self.timer.release();
        self.phase = Phase::NotStarted;
        self.reshuffle();
        info!(
            "round ended: got {}, skipped {}, slipped {}, {} points",
            summary.got, summary.skipped, summary.slipped, summary.points
        );
        summary
    }

    pub fn reset(&mut self) {
        self.timer.release();
        self.phase = Phase::NotStarted;
        self.tally = Tally::default();
        self.reshuffle();
        debug!("session reset");
    }

    pub fn change_mode(&mut self, settings: ModeSettings) {
        self.settings = settings;
        self.reset();
    }

    pub fn select_mode(&mut self, mode_id: &str) {
        self.change_mode(ModeSettings::for_mode(mode_id));
    }

    /// Applies an intent. Returns whether it changed anything.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Start => self.start().is_some(),
            Intent::Get => self.get(),
            Intent::Skip => self.skip(),
            Intent::Slip => self.slip(),
            Intent::Reset => {
                self.reset();
                true
            }
            Intent::Tick => self.tick() != TickOutcome::Ignored,
        }
    }

    fn reshuffle(&mut self) {
        self.deck = shuffle(self.corpus.cards(), &mut self.rng);
        self.card_index = 0;
    }
}
