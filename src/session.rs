use chrono::{DateTime, Duration, Local};
use rand::Rng;

use crate::evaluate::{check_guess, INCOMPLETE_GUESS};
use crate::generate::generate_round;
use crate::models::{Difficulty, Round};

pub const MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Victory,
    LockedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// One or more nodes still unset; no attempt consumed.
    Incomplete,
    Victory { computed: i32 },
    Mismatch { computed: i32, attempts: u32 },
    /// The mismatch that burned the last attempt.
    LockedOut { computed: i32 },
}

/// One game lifecycle, carried explicitly through transitions instead of
/// living in ambient state. The session owns everything the core engine
/// doesn't: the phase tag, attempt count, log buffer, and time budget.
#[derive(Debug, Clone)]
pub struct Session {
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    pub round: Option<Round>,
    pub attempts: u32,
    pub logs: Vec<String>,
    pub started_at: Option<DateTime<Local>>,
    pub deadline: Option<DateTime<Local>>,
    pub last_computed: Option<i32>,
}

impl Session {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            phase: GamePhase::NotStarted,
            round: None,
            attempts: 0,
            logs: vec![
                "SYSTEM INITIALIZED...".to_string(),
                "WAITING FOR USER SELECTION...".to_string(),
            ],
            started_at: None,
            deadline: None,
            last_computed: None,
        }
    }

    pub fn log(&mut self, message: impl Into<String>) {
        self.logs.push(message.into());
    }

    /// Generates a fresh round and arms the clock. Also the way out of a
    /// terminal phase: starting again resets attempts and logs a new
    /// protocol header.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<(), String> {
        let round = generate_round(self.difficulty, rng)?;
        let budget = self.difficulty.time_budget_secs();
        let now = Local::now();

        self.log(format!(
            "PROTOCOL_START: MODE_{}",
            self.difficulty.as_str().to_uppercase()
        ));
        self.log(format!("TARGET_VALUE_ENCRYPTED: {}", round.target));
        self.log("OPERATORS_HUSHED: [DEDUCTION_REQUIRED]");
        self.log(format!("TEMPORAL_LOCK_INIT: {}s", budget));

        self.round = Some(round);
        self.phase = GamePhase::InProgress;
        self.attempts = 0;
        self.started_at = Some(now);
        self.deadline = Some(now + Duration::seconds(budget));
        self.last_computed = None;
        Ok(())
    }

    /// Dials a value into a node. `index` is zero-based.
    pub fn select_pin(&mut self, index: usize, value: i32) -> Result<(), String> {
        if self.phase != GamePhase::InProgress {
            return Err("no active session".to_string());
        }
        let round = self.round.as_mut().ok_or("no active round")?;
        let pin = round
            .pins
            .get_mut(index)
            .ok_or_else(|| format!("node {} does not exist", index + 1))?;
        if !pin.offers(value) {
            return Err(format!("node {} does not offer {}", index + 1, value));
        }
        pin.selected_value = Some(value);
        Ok(())
    }

    /// Runs the bypass against the current selections.
    pub fn submit(&mut self) -> Result<GuessOutcome, String> {
        if self.phase != GamePhase::InProgress {
            return Err("no active session".to_string());
        }
        let (computed, target) = {
            let round = self.round.as_ref().ok_or("no active round")?;
            (check_guess(&round.pins, &round.operators), round.target)
        };

        if computed == INCOMPLETE_GUESS {
            self.log("CRITICAL: ALL PINS MUST BE SET BEFORE BYPASS.");
            return Ok(GuessOutcome::Incomplete);
        }

        self.last_computed = Some(computed);

        if computed == target {
            self.log(format!(
                "SUCCESS: SEQUENCE MATCHED. RESULT {} == TARGET {}",
                computed, target
            ));
            self.log("ACCESS GRANTED. DATA RECOVERED.");
            self.phase = GamePhase::Victory;
            return Ok(GuessOutcome::Victory { computed });
        }

        self.attempts += 1;
        self.log(format!(
            "ERROR: SEQUENCE MISMATCH. ATTEMPT {}/{} | RESULT {}",
            self.attempts, MAX_ATTEMPTS, computed
        ));

        if self.attempts >= MAX_ATTEMPTS {
            self.log("CRITICAL: SECURITY LOCKOUT. ENTROPY THRESHOLD REACHED.");
            self.phase = GamePhase::LockedOut;
            return Ok(GuessOutcome::LockedOut { computed });
        }

        Ok(GuessOutcome::Mismatch {
            computed,
            attempts: self.attempts,
        })
    }

    /// Called by the front end when the deadline passes. The core engine is
    /// never time-aware; the clock lives entirely here.
    pub fn expire(&mut self) {
        if self.phase == GamePhase::InProgress {
            self.log("CRITICAL: TEMPORAL BREACH DETECTED. SESSION EXPIRED.");
            self.phase = GamePhase::LockedOut;
        }
    }

    pub fn remaining_secs(&self, now: DateTime<Local>) -> i64 {
        match self.deadline {
            Some(deadline) => (deadline - now).num_seconds().max(0),
            None => 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, GamePhase::Victory | GamePhase::LockedOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Operator, Pin};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture_session() -> Session {
        let mut session = Session::new(Difficulty::Easy);
        session.round = Some(Round {
            target: 32,
            pins: vec![
                Pin { correct_value: 6, options: vec![6, 3, 11], selected_value: None },
                Pin { correct_value: 5, options: vec![2, 5, 9], selected_value: None },
                Pin { correct_value: 2, options: vec![7, 2, 14], selected_value: None },
            ],
            operators: vec![Operator::Multiply, Operator::Add],
        });
        session.phase = GamePhase::InProgress;
        session
    }

    #[test]
    fn test_start_arms_session() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = Session::new(Difficulty::Medium);
        assert_eq!(session.phase, GamePhase::NotStarted);

        session.start(&mut rng).unwrap();
        assert_eq!(session.phase, GamePhase::InProgress);
        let round = session.round.as_ref().unwrap();
        assert_eq!(round.pins.len(), 4);
        assert!(session.deadline.is_some());
        assert_eq!(
            session.remaining_secs(session.started_at.unwrap()),
            Difficulty::Medium.time_budget_secs()
        );
    }

    #[test]
    fn test_incomplete_submission_consumes_no_attempt() {
        let mut session = fixture_session();
        assert_eq!(session.submit().unwrap(), GuessOutcome::Incomplete);
        assert_eq!(session.attempts, 0);
        assert_eq!(session.phase, GamePhase::InProgress);
    }

    #[test]
    fn test_correct_guess_wins() {
        let mut session = fixture_session();
        session.select_pin(0, 6).unwrap();
        session.select_pin(1, 5).unwrap();
        session.select_pin(2, 2).unwrap();

        let outcome = session.submit().unwrap();
        assert_eq!(outcome, GuessOutcome::Victory { computed: 32 });
        assert_eq!(session.phase, GamePhase::Victory);
        assert!(session.is_terminal());
    }

    #[test]
    fn test_five_mismatches_lock_out() {
        let mut session = fixture_session();
        session.select_pin(0, 6).unwrap();
        session.select_pin(1, 2).unwrap();
        session.select_pin(2, 2).unwrap();

        for attempt in 1..MAX_ATTEMPTS {
            let outcome = session.submit().unwrap();
            assert_eq!(
                outcome,
                GuessOutcome::Mismatch { computed: 14, attempts: attempt }
            );
        }
        let outcome = session.submit().unwrap();
        assert_eq!(outcome, GuessOutcome::LockedOut { computed: 14 });
        assert_eq!(session.phase, GamePhase::LockedOut);
    }

    #[test]
    fn test_terminal_phase_rejects_further_moves() {
        let mut session = fixture_session();
        session.select_pin(0, 6).unwrap();
        session.select_pin(1, 5).unwrap();
        session.select_pin(2, 2).unwrap();
        session.submit().unwrap();

        assert!(session.select_pin(0, 3).is_err());
        assert!(session.submit().is_err());
    }

    #[test]
    fn test_select_rejects_foreign_value() {
        let mut session = fixture_session();
        assert!(session.select_pin(0, 4).is_err());
        assert!(session.select_pin(9, 6).is_err());
        assert!(session.select_pin(0, 11).is_ok());
    }

    #[test]
    fn test_expiry_locks_session() {
        let mut session = fixture_session();
        session.expire();
        assert_eq!(session.phase, GamePhase::LockedOut);
    }

    #[test]
    fn test_restart_from_terminal_phase() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = fixture_session();
        session.expire();

        session.start(&mut rng).unwrap();
        assert_eq!(session.phase, GamePhase::InProgress);
        assert_eq!(session.attempts, 0);
    }
}
