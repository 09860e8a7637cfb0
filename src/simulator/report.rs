//! Simulation report generation.

use crate::core::types::GameOverCause;
use serde::Serialize;

/// Outcome of one simulated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub run_index: u32,
    pub seed: u64,
    pub score: u32,
    pub ticks: u64,
    pub flaps: u32,
    /// None when the run hit the tick budget still alive.
    pub cause: Option<GameOverCause>,
}

impl RunStats {
    pub fn end_reason(&self) -> &'static str {
        match self.cause {
            Some(cause) => cause.name(),
            None => "Timeout",
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub max_ticks_per_run: u64,

    // Score stats
    pub avg_score: f64,
    pub min_score: u32,
    pub median_score: u32,
    pub max_score: u32,
    pub avg_flaps: f64,

    // How runs ended
    pub ground_crashes: u32,
    pub ceiling_crashes: u32,
    pub pipe_crashes: u32,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_ticks_per_run: u64) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let count_cause = |cause: GameOverCause| {
            runs.iter().filter(|r| r.cause == Some(cause)).count() as u32
        };

        let ground_crashes = count_cause(GameOverCause::Ground);
        let ceiling_crashes = count_cause(GameOverCause::Ceiling);
        let pipe_crashes = count_cause(GameOverCause::Pipe);
        let runs_timed_out = runs.iter().filter(|r| r.cause.is_none()).count() as u32;
        let avg_flaps = runs.iter().map(|r| r.flaps as f64).sum::<f64>() / divisor;

        let mut scores: Vec<u32> = runs.iter().map(|r| r.score).collect();
        scores.sort_unstable();

        Self {
            num_runs,
            runs_timed_out,
            max_ticks_per_run,
            avg_score: scores.iter().map(|&s| s as f64).sum::<f64>() / divisor,
            min_score: scores.first().copied().unwrap_or(0),
            median_score: scores.get(scores.len() / 2).copied().unwrap_or(0),
            max_score: scores.last().copied().unwrap_or(0),
            avg_flaps,
            ground_crashes,
            ceiling_crashes,
            pipe_crashes,
            run_stats: runs,
        }
    }

    pub fn crashes(&self, cause: GameOverCause) -> u32 {
        match cause {
            GameOverCause::Ground => self.ground_crashes,
            GameOverCause::Ceiling => self.ceiling_crashes,
            GameOverCause::Pipe => self.pipe_crashes,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} timed out (budget {} ticks)\n\n",
            self.num_runs, self.runs_timed_out, self.max_ticks_per_run
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:     {:.1}\n", self.avg_score));
        report.push_str(&format!("  Min Score:     {}\n", self.min_score));
        report.push_str(&format!("  Median Score:  {}\n", self.median_score));
        report.push_str(&format!("  Max Score:     {}\n", self.max_score));
        report.push_str(&format!("  Avg Flaps:     {:.1}\n\n", self.avg_flaps));

        report.push_str("── RUN ENDINGS ──────────────────────────────────────────────────\n");
        let divisor = self.num_runs.max(1) as f64;
        for cause in GameOverCause::ALL {
            let count = self.crashes(cause);
            let pct = count as f64 / divisor * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!(
                "  {:<8} {:>5} {:>5.1}% {}\n",
                cause.name(),
                count,
                pct,
                bar
            ));
        }
        let pct = self.runs_timed_out as f64 / divisor * 100.0;
        report.push_str(&format!(
            "  {:<8} {:>5} {:>5.1}% {}\n",
            "Timeout",
            self.runs_timed_out,
            pct,
            "█".repeat((pct / 5.0) as usize)
        ));

        if self.ceiling_crashes > self.num_runs / 4 {
            report.push_str("\n  ⚠️  Many ceiling crashes - flap impulse too strong?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(index: u32, score: u32, cause: Option<GameOverCause>) -> RunStats {
        RunStats {
            run_index: index,
            seed: index as u64,
            score,
            ticks: score as u64 + 1,
            flaps: score / 10,
            cause,
        }
    }

    #[test]
    fn test_from_runs_aggregates() {
        let report = SimReport::from_runs(
            vec![
                run(0, 30, Some(GameOverCause::Pipe)),
                run(1, 10, Some(GameOverCause::Ground)),
                run(2, 20, Some(GameOverCause::Pipe)),
                run(3, 100, None),
            ],
            100,
        );
        assert_eq!(report.num_runs, 4);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.min_score, 10);
        assert_eq!(report.median_score, 30);
        assert_eq!(report.max_score, 100);
        assert!((report.avg_score - 40.0).abs() < f64::EPSILON);
        assert_eq!(report.pipe_crashes, 2);
        assert_eq!(report.ground_crashes, 1);
        assert_eq!(report.ceiling_crashes, 0);
    }

    #[test]
    fn test_empty_report_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new(), 10);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_score, 0.0);
        assert!(report.to_text().contains("Runs: 0 total"));
    }

    #[test]
    fn test_json_report_round_trips_through_value() {
        let report = SimReport::from_runs(vec![run(0, 5, Some(GameOverCause::Ceiling))], 10);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["ceiling_crashes"], 1);
        assert_eq!(value["run_stats"][0]["cause"], "Ceiling");
    }
}
