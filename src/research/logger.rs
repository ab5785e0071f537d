use colored::Colorize;

use crate::weak_learner::WeakLearner;

use std::time::Instant;


const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Console report of a boosting run.
/// Prints the settings once, then one row per boosting round.
pub struct TrainingLogger {
    start: Instant,
    print_every: usize,
}


impl Default for TrainingLogger {
    fn default() -> Self {
        Self::new()
    }
}


impl TrainingLogger {
    /// Construct a logger that prints every round.
    pub fn new() -> Self {
        Self { start: Instant::now(), print_every: 1 }
    }


    /// Print only every `round`-th round of each class.
    /// The last round of a class is always printed.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.print_every = round.max(1);
        self
    }


    /// Print the current settings.
    pub fn print_stats<L>(
        &self,
        booster: &str,
        booster_info: Vec<(&str, String)>,
        weak_learner: &L,
    )
        where L: WeakLearner + ?Sized
    {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            booster.bold().green(),
        );
        print_info(booster_info);

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            weak_learner.name().bold().green(),
        );
        if let Some(info) = weak_learner.info() {
            print_info(info);
        }
        println!("{:=^FULL_WIDTH$}\n", "".bold());
    }


    /// Print the column names.
    pub fn print_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "CLASS".bold().red(),
            "ROUND".bold().red(),
            "ERROR".bold().green(),
            "ALPHA".bold().blue(),
            "TIME".bold().cyan(),
        );
    }


    #[inline(always)]
    fn prints(&self, round: usize, last: bool) -> bool {
        last || round % self.print_every == 0
    }


    /// Print one boosting round.
    pub fn print_round(
        &self,
        class_index: usize,
        round: usize,
        last: bool,
        error: f32,
        alpha: f32,
    )
    {
        if !self.prints(round, last) { return; }

        let tag = if last {
            "[FIN]".bold().bright_green()
        } else {
            "[LOG]".bold().magenta()
        };
        println!(
            "{} {}\t{}\t{}\t{}\t{}",
            tag,
            format!("{:>WIDTH$}", class_index).red(),
            format!("{:>WIDTH$}", round).red(),
            format!("{:>WIDTH$.PREC_WIDTH$}", error).green(),
            format!("{:>WIDTH$.PREC_WIDTH$}", alpha).blue(),
            time_format(self.start.elapsed().as_millis()).bold().cyan(),
        );
    }
}


fn print_info(info: Vec<(&str, String)>) {
    let line = info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    if !line.is_empty() {
        println!("{line}");
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_elapsed_time() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(61_500), " 01m 01s");
        assert_eq!(time_format(3_600_000), " 01h 00m");
    }


    #[test]
    fn skips_rows_between_print_rounds() {
        let logger = TrainingLogger::new().print_every(3);
        let printed = (1..=7)
            .filter(|&round| logger.prints(round, round == 7))
            .collect::<Vec<_>>();
        assert_eq!(printed, vec![3, 6, 7]);

        let logger = TrainingLogger::new().print_every(0);
        assert!((1..=4).all(|round| logger.prints(round, false)));
    }
}
