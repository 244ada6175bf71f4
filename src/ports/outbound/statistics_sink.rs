/// StatisticsSink port receiving the named counters of a run
pub trait StatisticsSink {
    fn add(&mut self, name: &str, value: usize);
}
