// Observer: the subject keeps a subscriber list and pushes every state
// change to it.

use std::rc::Rc;
use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::console::Console;

pub trait Observer {
    /// Receive an update from the subject. Returns whether the observer
    /// reacted to this state.
    fn update(&self, subject: &Subject, console: &mut Console) -> bool;
}

// ============================================================================
// Subject
// ============================================================================

#[derive(Default)]
pub struct Subject {
    state: i32,
    observers: Vec<Rc<dyn Observer>>,
    pacing: Duration,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Subscribe an observer. The same observer is never attached twice.
    pub fn attach(&mut self, observer: Rc<dyn Observer>, console: &mut Console) -> bool {
        if self.observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            debug!("observer already attached, ignoring");
            return false;
        }
        console.say("Subject: Attached an observer.");
        self.observers.push(observer);
        true
    }

    pub fn detach(&mut self, observer: &Rc<dyn Observer>, console: &mut Console) -> bool {
        let Some(index) = self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) else {
            debug!("observer not attached, nothing to detach");
            return false;
        };
        console.say("Subject: Detached an observer.");
        self.observers.remove(index);
        true
    }

    /// Run every observer's update in attachment order. Returns how many
    /// of them reacted.
    pub fn notify(&self, console: &mut Console) -> usize {
        console.say("Subject: Notifying observers...");
        self.observers
            .iter()
            .filter(|observer| observer.update(self, console))
            .count()
    }

    pub fn some_business_logic<R: Rng + ?Sized>(&mut self, rng: &mut R, console: &mut Console) -> usize {
        console.blank();
        console.say("Subject: I'm doing something important.");
        let state = rng.gen_range(0..10);
        self.change_state(state, console)
    }

    /// Set the state and notify right away; no batching or deduplication.
    pub fn change_state(&mut self, state: i32, console: &mut Console) -> usize {
        self.state = state;
        if !self.pacing.is_zero() {
            thread::sleep(self.pacing);
        }
        console.say(format!("Subject: My state has just changed to: {}", self.state));
        self.notify(console)
    }
}

// ============================================================================
// Concrete observers
// ============================================================================

pub struct ConcreteObserverA;

impl Observer for ConcreteObserverA {
    fn update(&self, subject: &Subject, console: &mut Console) -> bool {
        if subject.state() < 3 {
            console.say("ConcreteObserverA: Reacted to the event.");
            return true;
        }
        false
    }
}

pub struct ConcreteObserverB;

impl Observer for ConcreteObserverB {
    fn update(&self, subject: &Subject, console: &mut Console) -> bool {
        match subject.state() {
            0 | 2.. => {
                console.say("ConcreteObserverB: Reacted to the event.");
                true
            }
            _ => false,
        }
    }
}

// ============================================================================
// Client code
// ============================================================================

pub fn run_demo<R: Rng + ?Sized>(console: &mut Console, rng: &mut R, pacing: Duration) {
    let mut subject = Subject::new().with_pacing(pacing);

    let observer_a: Rc<dyn Observer> = Rc::new(ConcreteObserverA);
    subject.attach(observer_a, console);

    let observer_b: Rc<dyn Observer> = Rc::new(ConcreteObserverB);
    subject.attach(Rc::clone(&observer_b), console);

    subject.some_business_logic(rng, console);
    subject.some_business_logic(rng, console);

    subject.detach(&observer_b, console);

    subject.some_business_logic(rng, console);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    struct Recorder {
        label: &'static str,
        log: Rc<RefCell<Vec<(&'static str, i32)>>>,
    }

    impl Observer for Recorder {
        fn update(&self, subject: &Subject, _console: &mut Console) -> bool {
            self.log.borrow_mut().push((self.label, subject.state()));
            true
        }
    }

    fn reactions(console: &Console) -> Vec<&str> {
        console
            .lines()
            .iter()
            .filter(|line| line.contains("Reacted"))
            .map(|line| line.split(':').next().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_threshold_sequence() {
        let mut console = Console::captured();
        let mut subject = Subject::new();
        subject.attach(Rc::new(ConcreteObserverA), &mut console);
        subject.attach(Rc::new(ConcreteObserverB), &mut console);

        console.clear();
        assert_eq!(subject.change_state(2, &mut console), 2);
        assert_eq!(reactions(&console), ["ConcreteObserverA", "ConcreteObserverB"]);

        console.clear();
        assert_eq!(subject.change_state(0, &mut console), 2);
        assert_eq!(reactions(&console), ["ConcreteObserverA", "ConcreteObserverB"]);

        console.clear();
        assert_eq!(subject.change_state(5, &mut console), 1);
        assert_eq!(reactions(&console), ["ConcreteObserverB"]);
    }

    #[test]
    fn test_state_one_only_wakes_a() {
        let mut console = Console::captured();
        let mut subject = Subject::new();
        subject.attach(Rc::new(ConcreteObserverA), &mut console);
        subject.attach(Rc::new(ConcreteObserverB), &mut console);

        console.clear();
        subject.change_state(1, &mut console);
        assert_eq!(reactions(&console), ["ConcreteObserverA"]);
    }

    #[test]
    fn test_notify_once_each_in_attachment_order() {
        let mut console = Console::captured();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        for label in ["first", "second", "third"] {
            subject.attach(
                Rc::new(Recorder {
                    label,
                    log: Rc::clone(&log),
                }),
                &mut console,
            );
        }

        subject.change_state(4, &mut console);
        assert_eq!(*log.borrow(), [("first", 4), ("second", 4), ("third", 4)]);
    }

    #[test]
    fn test_detached_observer_is_silent() {
        let mut console = Console::captured();
        let log = Rc::new(RefCell::new(Vec::new()));
        let kept: Rc<dyn Observer> = Rc::new(Recorder {
            label: "kept",
            log: Rc::clone(&log),
        });
        let dropped: Rc<dyn Observer> = Rc::new(Recorder {
            label: "dropped",
            log: Rc::clone(&log),
        });

        let mut subject = Subject::new();
        subject.attach(Rc::clone(&kept), &mut console);
        subject.attach(Rc::clone(&dropped), &mut console);
        assert!(subject.detach(&dropped, &mut console));

        subject.change_state(7, &mut console);
        assert_eq!(*log.borrow(), [("kept", 7)]);
    }

    #[test]
    fn test_detach_unknown_is_noop() {
        let mut console = Console::captured();
        let mut subject = Subject::new();
        subject.attach(Rc::new(ConcreteObserverA), &mut console);
        let stranger: Rc<dyn Observer> = Rc::new(ConcreteObserverB);

        console.clear();
        assert!(!subject.detach(&stranger, &mut console));
        assert_eq!(subject.observer_count(), 1);
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_duplicate_attach_ignored() {
        let mut console = Console::captured();
        let observer: Rc<dyn Observer> = Rc::new(ConcreteObserverA);
        let mut subject = Subject::new();

        assert!(subject.attach(Rc::clone(&observer), &mut console));
        assert!(!subject.attach(Rc::clone(&observer), &mut console));
        assert_eq!(subject.observer_count(), 1);
    }

    #[test]
    fn test_business_logic_draws_single_digit() {
        let mut console = Console::captured();
        let mut rng = StdRng::seed_from_u64(11);
        let mut subject = Subject::new();

        for _ in 0..50 {
            subject.some_business_logic(&mut rng, &mut console);
            assert!((0..10).contains(&subject.state()));
        }
        assert!(console.contains("Subject: I'm doing something important."));
    }

    #[test]
    fn test_initial_state_is_zero() {
        assert_eq!(Subject::new().state(), 0);
    }
}
