use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::VecDeque;
use std::fmt;

/// The number of records kept unless configured otherwise
pub const DEFAULT_CAPACITY: usize = 20;

/// Receives a line for every completed calculation
pub trait HistorySink {
    fn record(&mut self, record: HistoryRecord);
}

#[derive(Debug, PartialEq, Eq, Clone)]
/// One line of calculation history
pub struct HistoryRecord(String);

impl HistoryRecord {
    /// Returns a record of the form "{expression} = {result}"
    pub fn calculation(expression: &str, result: &str) -> HistoryRecord {
        HistoryRecord(format!("{} = {}", expression, result))
    }

    /// Returns a record of the form "{label}: {input} -> {text}", as used by
    /// the calculators that do not go through the expression evaluator
    pub fn labelled(label: &str, input: &str, text: &str) -> HistoryRecord {
        HistoryRecord(format!("{}: {} -> {}", label, input, text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<HistoryRecord> for String {
    fn from(record: HistoryRecord) -> String {
        record.0
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
/// A bounded history in insertion order. Once full, each new record evicts
/// the oldest.
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Returns an empty history holding up to DEFAULT_CAPACITY records
    pub fn new() -> History {
        History::with_capacity(DEFAULT_CAPACITY)
    }

    /// Returns an empty history holding up to the given number of records,
    /// which is raised to one if zero
    pub fn with_capacity(capacity: usize) -> History {
        let capacity = capacity.max(1);
        History {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuilds a history from previously saved lines, keeping the newest
    /// if there are more than fit
    pub fn from_lines<I>(lines: I, capacity: usize) -> History
    where
        I: IntoIterator<Item = String>,
    {
        let mut history = History::with_capacity(capacity);
        for line in lines {
            history.push(line);
        }

        history
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the record at the given position, oldest first
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Iterates over the records, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Removes every record
    pub fn clear(&mut self) {
        debug!("history: cleared {} records", self.entries.len());
        self.entries.clear();
    }

    /// Removes and returns the record at the given position, oldest first
    pub fn delete(&mut self, index: usize) -> Option<String> {
        let removed = self.entries.remove(index);
        if let Some(line) = &removed {
            debug!("history: deleted #{} {:?}", index, line);
        }

        removed
    }

    fn push(&mut self, line: String) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line);
    }
}

impl HistorySink for History {
    fn record(&mut self, record: HistoryRecord) {
        debug!("history: {}", record);
        self.push(record.into());
    }
}

/// Saved as a plain array of lines, oldest first
impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

/// Reloads with DEFAULT_CAPACITY. To reload with another capacity,
/// deserialize the lines and pass them to History::from_lines.
impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<History, D::Error> {
        let lines = Vec::<String>::deserialize(deserializer)?;
        Ok(History::from_lines(lines, DEFAULT_CAPACITY))
    }
}
