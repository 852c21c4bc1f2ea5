use std::{fs::File, io::BufWriter, path::Path};

use serde::{Deserialize, Serialize};

/// The state of the model right after one iteration's update, with the loss it was measured at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub theta0: f64,
    pub theta1: f64,
    pub loss: f64,
}

/// Per-iteration trace of a training run, meant for charting.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingHistory {
    records: Vec<IterationRecord>,
}

impl TrainingHistory {
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            records: Vec::with_capacity(iterations),
        }
    }

    pub fn push(&mut self, record: IterationRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    pub fn losses(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.loss)
    }

    /// Writes the history as a JSON array of records.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self).map_err(std::io::Error::other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_a_plain_array() {
        let mut history = TrainingHistory::with_capacity(2);
        history.push(IterationRecord {
            theta0: 0.5,
            theta1: 1.0,
            loss: 2.0,
        });

        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"[{"theta0":0.5,"theta1":1.0,"loss":2.0}]"#);
    }

    #[test]
    fn losses_follow_record_order() {
        let mut history = TrainingHistory::default();
        for i in 0..3 {
            let i = i as f64;
            history.push(IterationRecord {
                theta0: i,
                theta1: -i,
                loss: i * i,
            });
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.records()[2].theta1, -2.0);
        assert_eq!(history.losses().collect::<Vec<_>>(), [0.0, 1.0, 4.0]);
    }
}
