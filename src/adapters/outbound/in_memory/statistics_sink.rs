use crate::ports::outbound::StatisticsSink;

/// RecordingStatisticsSink adapter keeping every counter in dump order
#[derive(Debug, Default)]
pub struct RecordingStatisticsSink {
    entries: Vec<(String, usize)>,
}

impl RecordingStatisticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| *value)
    }
}

impl StatisticsSink for RecordingStatisticsSink {
    fn add(&mut self, name: &str, value: usize) {
        self.entries.push((name.to_string(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut sink = RecordingStatisticsSink::new();
        sink.add("newIssuesNotifs", 1);
        sink.add("newIssuesDeliveries", 3);

        assert_eq!(sink.entries().len(), 2);
        assert_eq!(sink.entries()[0].0, "newIssuesNotifs");
        assert_eq!(sink.get("newIssuesDeliveries"), Some(3));
        assert_eq!(sink.get("changesNotifs"), None);
    }
}
