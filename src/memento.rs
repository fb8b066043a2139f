// Memento: the originator packs its state into opaque capsules, the
// caretaker stacks them up and hands them back on undo.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};
use rand::Rng;
use tracing::warn;

use crate::console::Console;
use crate::error::{PatternError, Result};

const ALLOWED_SYMBOLS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const STATE_LENGTH: usize = 30;
const NAME_PREFIX_CHARS: usize = 9;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Capsules
// =============================================================================

/// Snapshot of an [`Originator`]. Only the originator reads the state back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteMemento {
    state: String,
    date: DateTime<Local>,
}

impl ConcreteMemento {
    fn new(state: String) -> Self {
        Self {
            state,
            date: Local::now(),
        }
    }

    pub fn name(&self) -> String {
        let prefix: String = self.state.chars().take(NAME_PREFIX_CHARS).collect();
        format!("{} / ({prefix})...", self.date.format(DATE_FORMAT))
    }
}

/// Capsule produced by some other kind of originator. Carries display
/// metadata only; a text [`Originator`] refuses to restore from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignMemento {
    pub kind: String,
    pub date: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Memento {
    Concrete(ConcreteMemento),
    Foreign(ForeignMemento),
}

impl Memento {
    pub fn name(&self) -> String {
        match self {
            Memento::Concrete(memento) => memento.name(),
            Memento::Foreign(memento) => {
                format!("{} / <{}>", memento.date.format(DATE_FORMAT), memento.kind)
            }
        }
    }

    pub fn date(&self) -> DateTime<Local> {
        match self {
            Memento::Concrete(memento) => memento.date,
            Memento::Foreign(memento) => memento.date,
        }
    }
}

// =============================================================================
// Originator
// =============================================================================

#[derive(Debug)]
pub struct Originator {
    state: String,
    pacing: Duration,
}

impl Originator {
    pub fn new(state: impl Into<String>, console: &mut Console) -> Self {
        let state = state.into();
        console.say(format!("Originator: My initial state is: {state}"));
        Self {
            state,
            pacing: Duration::ZERO,
        }
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// The only business logic that mutates the state.
    pub fn do_something<R: Rng + ?Sized>(&mut self, rng: &mut R, console: &mut Console) {
        console.say("Originator: I'm doing something important");
        self.state = generate_random_string(rng, STATE_LENGTH, self.pacing);
        console.say(format!("Originator: and my state has changed to: {}", self.state));
    }

    pub fn save(&self) -> Memento {
        Memento::Concrete(ConcreteMemento::new(self.state.clone()))
    }

    pub fn restore(&mut self, memento: &Memento, console: &mut Console) -> Result<()> {
        let Memento::Concrete(memento) = memento else {
            return Err(PatternError::incompatible_capsule(memento.name()));
        };
        self.state = memento.state.clone();
        console.say(format!("Originator: My state has restored to: {}", self.state));
        Ok(())
    }
}

fn generate_random_string<R: Rng + ?Sized>(rng: &mut R, length: usize, pacing: Duration) -> String {
    (0..length)
        .map(|_| {
            let symbol = ALLOWED_SYMBOLS[rng.gen_range(0..ALLOWED_SYMBOLS.len())] as char;
            if !pacing.is_zero() {
                thread::sleep(pacing);
            }
            symbol
        })
        .collect()
}

// =============================================================================
// Caretaker
// =============================================================================

/// History stack. Works with capsule metadata only, never with the state.
#[derive(Debug, Default)]
pub struct Caretaker {
    history: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backup(&mut self, originator: &Originator, console: &mut Console) {
        console.blank();
        console.say("Caretaker: Saving Originator's state...");
        self.history.push(originator.save());
    }

    /// Pop capsules until one restores. Capsules the originator rejects are
    /// dropped and the next older one is tried. Returns `false` when the
    /// history ran out without a successful restore.
    pub fn undo(&mut self, originator: &mut Originator, console: &mut Console) -> bool {
        while let Some(memento) = self.history.pop() {
            console.say(format!("Caretaker: Restoring state to: {}", memento.name()));

            match originator.restore(&memento, console) {
                Ok(()) => return true,
                Err(err) => warn!(error = %err, "skipping capsule, trying an older one"),
            }
        }
        false
    }

    pub fn show_history(&self, console: &mut Console) {
        console.say("Caretaker: Here's the list of mementos:");
        for memento in &self.history {
            console.say(memento.name());
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

// =============================================================================
// Client code
// =============================================================================

pub fn run_demo<R: Rng + ?Sized>(console: &mut Console, rng: &mut R, pacing: Duration) {
    let mut originator = Originator::new("Super-duper-super-puper-super.", console).with_pacing(pacing);
    let mut caretaker = Caretaker::new();

    for _ in 0..3 {
        caretaker.backup(&originator, console);
        originator.do_something(rng, console);
    }

    console.blank();
    caretaker.show_history(console);

    console.blank();
    console.heading("Client: Now, let's rollback!");
    console.blank();
    caretaker.undo(&mut originator, console);

    console.blank();
    console.blank();
    console.heading("Client: Once more!");
    console.blank();
    caretaker.undo(&mut originator, console);

    console.blank();
}
