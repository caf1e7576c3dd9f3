use std::path::PathBuf;

use log::{debug, info, trace, warn};
use rand::{rngs::StdRng, SeedableRng};
use strum::EnumCount;

use crate::{
    abstraction::{key_for, StateKey},
    action::Action,
    assert_interval,
    env::Observation,
    error::{Error, Result},
    exploration::{Choice, EpsilonGreedy, WeightedExploration},
    memory::Transition,
    reward::reward_for,
    store::TableStore,
};

use super::q_table::QTable;

/// Configuration for the [`QAgent`]
#[derive(Debug, Clone)]
pub struct QAgentConfig {
    /// Learning rate, in `[0,1]`
    pub alpha: f64,
    /// Discount factor, in `[0,1]`
    pub gamma: f64,
    /// Probability of exploring while training, in `[0,1]`
    pub epsilon: f64,
    /// Relative odds of each action when exploring, in [`Action::ALL`] order
    pub exploration_weights: [u32; Action::COUNT],
    /// Value standing in for the successor estimate when an action reaches the goal
    pub goal_bootstrap: f64,
    /// Directory holding persisted tables
    pub table_dir: PathBuf,
    /// Table used when no training table is named
    pub default_table: String,
    /// Seed for the exploration RNG, seeded from entropy when `None`
    pub seed: Option<u64>,
}

impl Default for QAgentConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            gamma: 0.9,
            epsilon: 0.2,
            exploration_weights: [8, 1, 1, 1, 1],
            goal_bootstrap: 650.0,
            table_dir: PathBuf::from("train"),
            default_table: String::from("q"),
            seed: None,
        }
    }
}

/// Whether the agent learns from what it observes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Explore, update the table after every step, and persist every update
    Training,
    /// Act greedily from an already trained table, never writing to it
    Inference,
}

/// A tabular Q-learning agent for the lane-crossing game
///
/// Each decision reduces the observed board to a [`StateKey`], picks an action from that key's
/// row, and, while training, updates the value of the previous decision now that its outcome
/// is known.
///
/// The table file is the source of truth while training: every update is written to disk and
/// the in-memory table is then reloaded from that file, so the two never diverge.
pub struct QAgent {
    table: QTable,
    store: TableStore,
    name: String,
    mode: Mode,
    alpha: f64,
    gamma: f64,
    goal_bootstrap: f64,
    exploration: EpsilonGreedy,
    weighted: WeightedExploration,
    rng: StdRng,
    pending: Option<Transition>,
}

impl QAgent {
    /// Create an agent, training the table named `train` if given, else playing greedily from
    /// the default table
    ///
    /// ### Errors
    /// - [`Error::MissingModel`] if not training and the default table was never saved
    ///
    /// **Panics** if `alpha`, `gamma`, or `epsilon` is not in the interval `[0,1]`
    pub fn new(config: QAgentConfig, train: Option<&str>) -> Result<Self> {
        match train {
            Some(name) => Self::open(config, name, Mode::Training),
            None => {
                let name = config.default_table.clone();
                Self::open(config, &name, Mode::Inference)
            }
        }
    }

    /// Create an agent on the table called `name`
    ///
    /// **Panics** if `alpha`, `gamma`, or `epsilon` is not in the interval `[0,1]`
    pub fn open(config: QAgentConfig, name: &str, mode: Mode) -> Result<Self> {
        assert_interval!(config.alpha, 0.0, 1.0);
        assert_interval!(config.gamma, 0.0, 1.0);

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut agent = Self {
            table: QTable::new(),
            store: TableStore::new(config.table_dir),
            name: name.to_owned(),
            mode,
            alpha: config.alpha,
            gamma: config.gamma,
            goal_bootstrap: config.goal_bootstrap,
            exploration: EpsilonGreedy::new(config.epsilon),
            weighted: WeightedExploration::new(config.exploration_weights)?,
            rng,
            pending: None,
        };
        agent.load()?;
        Ok(agent)
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn table_name(&self) -> &str {
        &self.name
    }

    pub fn table_path(&self) -> PathBuf {
        self.store.path_for(&self.name)
    }

    /// The decision still waiting for its outcome, if any
    pub fn pending(&self) -> Option<&Transition> {
        self.pending.as_ref()
    }

    /// Replace the in-memory table with the persisted one
    ///
    /// While training, a missing or unreadable table leaves the agent with an empty table.
    ///
    /// ### Errors
    /// - [`Error::MissingModel`] if not training and the table was never saved
    /// - [`Error::CorruptTable`] or [`Error::Io`] if not training and the table can't be read
    pub fn load(&mut self) -> Result<()> {
        let path = self.table_path();
        match (self.store.read(&self.name), self.mode) {
            (Ok(Some(table)), Mode::Training) => {
                info!("training {} ({} states)", path.display(), table.len());
                self.table = table;
            }
            (Ok(Some(table)), Mode::Inference) => {
                info!("loaded {} ({} states)", path.display(), table.len());
                self.table = table;
            }
            (Ok(None), Mode::Training) => {
                info!("training {} (new table)", path.display());
                self.table = QTable::new();
            }
            (Ok(None), Mode::Inference) => {
                return Err(Error::MissingModel {
                    name: self.name.clone(),
                    path,
                });
            }
            (Err(e), Mode::Training) => {
                warn!("discarding unreadable table, starting empty: {e}");
                self.table = QTable::new();
            }
            (Err(e), Mode::Inference) => return Err(e),
        }
        Ok(())
    }

    /// Persist the full table
    pub fn save(&self) -> Result<()> {
        self.store.write(&self.name, &self.table)
    }

    /// Forget the pending decision so the next one starts a fresh episode
    ///
    /// Without this the first decision of an episode updates the last decision of the previous
    /// one, against a state from the new episode.
    pub fn start_episode(&mut self) {
        self.pending = None;
    }

    /// Learn from the terminal state an episode ended in, then forget the pending decision
    ///
    /// Does nothing outside of training or when no decision is pending.
    pub fn end_episode<O: Observation + ?Sized>(&mut self, terminal: &O) -> Result<()> {
        if self.mode != Mode::Training {
            return Ok(());
        }
        if let Some(previous) = self.pending.take() {
            let key = key_for(terminal);
            self.table.get_or_insert(&key);
            self.update(&previous, &key, terminal)?;
        }
        Ok(())
    }

    /// Pick the action to play from `state`
    ///
    /// While training this also updates the previous decision against `state` and persists the
    /// result, so any storage failure is returned. A failed step leaves no pending decision.
    pub fn choose_action<O: Observation + ?Sized>(&mut self, state: &O) -> Result<Action> {
        let key = key_for(state);
        let greedy = self.table.get_or_insert(&key).greedy_action();

        if self.mode == Mode::Inference {
            return Ok(greedy);
        }

        let action = match self.exploration.choose(&mut self.rng) {
            Choice::Explore => self.weighted.sample(&mut self.rng),
            Choice::Exploit => greedy,
        };
        trace!("{key}: chose {action} (greedy {greedy})");

        if let Some(previous) = self.pending.take() {
            self.update(&previous, &key, state)?;
        }
        self.pending = Some(Transition { key, action });

        Ok(action)
    }

    /// One-step Q-learning update of `previous` now that it is known to have led to `current`
    ///
    /// Reaching the goal ends the episode, so [`QAgentConfig::goal_bootstrap`] stands in for
    /// the value of the successor. The row for `key` must already exist.
    ///
    /// A non-finite result is rejected before anything is written, since JSON cannot hold it.
    fn update<O: Observation + ?Sized>(
        &mut self,
        previous: &Transition,
        key: &StateKey,
        current: &O,
    ) -> Result<()> {
        let reward = reward_for(current);
        let future = if current.at_goal() {
            self.goal_bootstrap
        } else {
            self.table.get(key).map_or(0.0, |row| row.max_value())
        };

        let row = self.table.get_or_insert(&previous.key);
        let q_value = row.get(previous.action);
        let new_q_value =
            (1.0 - self.alpha) * q_value + self.alpha * (reward + self.gamma * future);
        if !new_q_value.is_finite() {
            return Err(Error::NonFiniteValue {
                key: previous.key.clone(),
                action: previous.action,
                value: new_q_value,
            });
        }
        row.set(previous.action, new_q_value);
        debug!(
            "{} {}: {q_value} -> {new_q_value} (reward {reward})",
            previous.key, previous.action
        );

        self.save()?;
        self.table = self.store.read(&self.name)?.ok_or_else(|| Error::MissingModel {
            name: self.name.clone(),
            path: self.table_path(),
        })?;
        Ok(())
    }
}
