//! Simulation report generation.

use serde::Serialize;

/// Outcome of one simulated battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub won: bool,
    pub answers: u32,
    pub correct_answers: u32,
    pub crits: u32,
    pub lowest_hero_hp: u32,
    pub coins: u32,
    pub reward_paid: bool,
}

/// Aggregated results from multiple simulated battles.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub victories: u32,
    pub abandoned: u32,

    pub avg_answers_to_victory: f64,
    pub max_answers_to_victory: u32,
    pub accuracy_observed: f64,
    pub crit_rate: f64,

    pub lowest_hero_hp: u32,
    pub avg_lowest_hero_hp: f64,

    pub total_coins: u32,
    pub avg_coins: f64,
    pub rewards_paid: u32,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let victories = runs.iter().filter(|r| r.won).count() as u32;

        let won: Vec<&RunStats> = runs.iter().filter(|r| r.won).collect();
        let avg_answers_to_victory =
            won.iter().map(|r| r.answers as f64).sum::<f64>() / victories.max(1) as f64;
        let max_answers_to_victory = won.iter().map(|r| r.answers).max().unwrap_or(0);

        let total_answers: u32 = runs.iter().map(|r| r.answers).sum();
        let total_correct: u32 = runs.iter().map(|r| r.correct_answers).sum();
        let total_crits: u32 = runs.iter().map(|r| r.crits).sum();
        let accuracy_observed = total_correct as f64 / total_answers.max(1) as f64;
        let crit_rate = total_crits as f64 / total_correct.max(1) as f64;

        let lowest_hero_hp = runs.iter().map(|r| r.lowest_hero_hp).min().unwrap_or(0);
        let avg_lowest_hero_hp =
            runs.iter().map(|r| r.lowest_hero_hp as f64).sum::<f64>() / divisor;

        let total_coins: u32 = runs.iter().map(|r| r.coins).sum();
        let rewards_paid = runs.iter().filter(|r| r.reward_paid).count() as u32;

        Self {
            num_runs,
            victories,
            abandoned: num_runs - victories,
            avg_answers_to_victory,
            max_answers_to_victory,
            accuracy_observed,
            crit_rate,
            lowest_hero_hp,
            avg_lowest_hero_hp,
            total_coins,
            avg_coins: total_coins as f64 / divisor,
            rewards_paid,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Battles: {} total, {} won, {} abandoned\n\n",
            self.num_runs, self.victories, self.abandoned
        ));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Answers to Win:  {:.2}\n",
            self.avg_answers_to_victory
        ));
        report.push_str(&format!(
            "  Max Answers to Win:  {}\n",
            self.max_answers_to_victory
        ));
        report.push_str(&format!(
            "  Observed Accuracy:   {:.1}%\n",
            self.accuracy_observed * 100.0
        ));
        report.push_str(&format!(
            "  Crit Rate:           {:.1}%\n\n",
            self.crit_rate * 100.0
        ));

        report.push_str("── HERO ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Lowest HP:           {}\n", self.lowest_hero_hp));
        report.push_str(&format!(
            "  Avg Lowest HP:       {:.1}\n\n",
            self.avg_lowest_hero_hp
        ));

        report.push_str("── GOLD ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Total Coins:         {}\n", self.total_coins));
        report.push_str(&format!("  Avg Coins:           {:.1}\n", self.avg_coins));
        report.push_str(&format!("  Rewards Paid:        {}\n\n", self.rewards_paid));

        report.push_str("── ANSWER DISTRIBUTION ──────────────────────────────────────────\n");
        let mut buckets = [0u32; 6];
        for run in self.run_stats.iter().filter(|r| r.won) {
            let slot = (run.answers as usize).saturating_sub(1).min(buckets.len() - 1);
            buckets[slot] += 1;
        }
        for (i, count) in buckets.iter().enumerate() {
            let pct = (*count as f64 / self.victories.max(1) as f64) * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            let label = if i == buckets.len() - 1 {
                format!("{}+", i + 1)
            } else {
                format!("{}", i + 1)
            };
            report.push_str(&format!("  {:>3} answers: {:>5.1}% {}\n", label, pct, bar));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let win_rate = (self.victories as f64 / self.num_runs.max(1) as f64) * 100.0;
        let rating = if self.avg_answers_to_victory < 1.5 {
            "ONE-SHOT - Every correct answer ends the fight"
        } else if self.avg_answers_to_victory < 5.0 {
            "GOOD - Short but eventful fights"
        } else {
            "LONG - Consider raising hero damage"
        };
        report.push_str(&format!("  Win Rate:        {:.1}%\n", win_rate));
        report.push_str(&format!("  Pacing Rating:   {}\n", rating));
        if self.rewards_paid != self.victories {
            report.push_str(&format!(
                "  ⚠️  {} victories without a reward\n",
                self.victories - self.rewards_paid.min(self.victories)
            ));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(won: bool, answers: u32, crits: u32, hp: u32) -> RunStats {
        RunStats {
            won,
            answers,
            correct_answers: if won { 1.max(crits) } else { 0 },
            crits,
            lowest_hero_hp: hp,
            coins: if won { 15 } else { 0 },
            reward_paid: won,
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs(vec![
            run(true, 1, 0, 100),
            run(true, 3, 1, 70),
            run(false, 10, 0, 10),
        ]);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.victories, 2);
        assert_eq!(report.abandoned, 1);
        assert!((report.avg_answers_to_victory - 2.0).abs() < 1e-9);
        assert_eq!(report.max_answers_to_victory, 3);
        assert_eq!(report.lowest_hero_hp, 10);
        assert_eq!(report.total_coins, 30);
        assert_eq!(report.rewards_paid, 2);
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_answers_to_victory, 0.0);
        assert!(report.to_text().contains("SIMULATION REPORT"));
    }

    #[test]
    fn test_json_skips_run_list() {
        let report = SimReport::from_runs(vec![run(true, 1, 0, 100)]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["victories"], 1);
        assert!(value.get("run_stats").is_none());
    }
}
