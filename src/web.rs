use std::sync::OnceLock;

use log::{warn, LevelFilter};
use wasm_bindgen::prelude::*;

use crate::clue::SlipMatcher;
use crate::config::{LoadProfile, SessionConfig};
use crate::console;
use crate::corpus::Corpus;
use crate::registry::GAMES;
use crate::round::{Intent, Session, TickOutcome};
use crate::swipe::{format_clock, resolve_swipe};
use crate::timer::TimerTicket;

#[derive(Debug)]
struct LoadedCorpus {
    profile: LoadProfile,
    corpus: Corpus,
}

static CORPUS: OnceLock<LoadedCorpus> = OnceLock::new();

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

/// Loads the bundled corpus into `slot` on first use. Later calls keep the
/// first load, whatever profile they ask for.
fn load_once(slot: &OnceLock<LoadedCorpus>, profile: LoadProfile) -> crate::Result<&LoadedCorpus> {
    if let Some(loaded) = slot.get() {
        if loaded.profile != profile {
            warn!(
                "corpus already loaded with {:?} profile, ignoring {:?}",
                loaded.profile, profile
            );
        }
        return Ok(loaded);
    }

    let corpus = Corpus::bundled(profile)?;
    Ok(slot.get_or_init(|| LoadedCorpus { profile, corpus }))
}

/// Loads the bundled word lists. Must be called once before any game is
/// created; repeated calls return the already loaded card count.
#[wasm_bindgen(js_name = initCorpus)]
pub fn init_corpus(production: bool) -> Result<usize, JsValue> {
    console::init(if production {
        LevelFilter::Warn
    } else {
        LevelFilter::Debug
    });

    let loaded = load_once(&CORPUS, LoadProfile::from_production_flag(production))
        .map_err(|err| js_error(&err.to_string()))?;
    Ok(loaded.corpus.len())
}

#[wasm_bindgen(js_name = gameCatalogue)]
pub fn game_catalogue() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(GAMES)?)
}

#[wasm_bindgen(js_name = formatClock)]
pub fn format_clock_js(seconds: u32) -> String {
    format_clock(seconds)
}

#[wasm_bindgen]
pub struct TabooGame {
    session: Session,
    matcher: Option<SlipMatcher>,
}

#[wasm_bindgen]
impl TabooGame {
    /// `config` is an optional `{ mode, seed }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TabooGame, JsValue> {
        let config: SessionConfig = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let corpus = CORPUS
            .get()
            .map(|loaded| loaded.corpus.clone())
            .ok_or_else(|| js_error("corpus not loaded, call initCorpus first"))?;

        Ok(TabooGame {
            session: Session::from_config(corpus, &config),
            matcher: None,
        })
    }

    /// Starts a round and returns its timer ticket, or `undefined` if nothing
    /// started. The host should cancel its interval once the ticket is stale.
    pub fn start(&mut self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.session.start())?)
    }

    pub fn get(&mut self) -> bool {
        self.session.get()
    }

    pub fn skip(&mut self) -> bool {
        self.session.skip()
    }

    pub fn slip(&mut self) -> bool {
        self.session.slip()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    #[wasm_bindgen(js_name = selectMode)]
    pub fn select_mode(&mut self, mode_id: &str) {
        self.session.select_mode(mode_id);
    }

    /// Applies an intent by name (`"start"`, `"get"`, `"skip"`, ...).
    pub fn apply(&mut self, intent: JsValue) -> Result<bool, JsValue> {
        let intent: Intent = serde_wasm_bindgen::from_value(intent)?;
        Ok(self.session.apply(intent))
    }

    /// Applies the swipe gesture ending at `offset_x`. Returns whether the
    /// card was committed.
    pub fn swipe(&mut self, offset_x: f64) -> bool {
        resolve_swipe(offset_x).is_some_and(|intent| self.session.apply(intent))
    }

    /// One-second timer callback. Returns `true` when the round just ended.
    pub fn tick(&mut self, ticket: JsValue) -> Result<bool, JsValue> {
        let ticket: TimerTicket = serde_wasm_bindgen::from_value(ticket)?;
        Ok(matches!(self.session.tick_with(ticket), TickOutcome::RoundEnded(_)))
    }

    /// Per-frame update with `dt` seconds. Returns `true` when the round just ended.
    pub fn advance(&mut self, dt: f64) -> bool {
        matches!(self.session.advance_clock(dt), TickOutcome::RoundEnded(_))
    }

    #[wasm_bindgen(js_name = isTicketCurrent)]
    pub fn is_ticket_current(&self, ticket: JsValue) -> Result<bool, JsValue> {
        let ticket: TimerTicket = serde_wasm_bindgen::from_value(ticket)?;
        Ok(self.session.timer_ticket() == Some(ticket))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.session.snapshot())?)
    }

    pub fn summary(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.session.summary())?)
    }

    pub fn clock(&self) -> String {
        format_clock(self.session.time_left())
    }

    /// Forbidden words of the current card used in `clue`.
    #[wasm_bindgen(js_name = checkClue)]
    pub fn check_clue(&mut self, clue: &str) -> Result<JsValue, JsValue> {
        if let Some(card) = self.session.current_card() {
            if self.matcher.as_ref().map(SlipMatcher::card_id) != Some(card.id) {
                self.matcher = Some(SlipMatcher::new(card));
            }
        } else {
            self.matcher = None;
        }

        let slips = self
            .matcher
            .as_ref()
            .map(|matcher| matcher.find(clue))
            .unwrap_or_default();
        Ok(serde_wasm_bindgen::to_value(&slips)?)
    }
}
