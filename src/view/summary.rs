use std::fmt;

use super::utils::{block_label, player_name, signed};
use crate::controller::RoundSettlement;

const NAME_WIDTH: usize = 12;

/// Plain-text report: balances, who owes whom, category totals and block outs.
#[must_use]
pub fn render_summary_text(report: &RoundSettlement) -> String {
    SummaryText(report).to_string()
}

/// `Display` adapter for the plain-text report.
pub struct SummaryText<'a>(pub &'a RoundSettlement);

impl fmt::Display for SummaryText<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let players = &report.players;

        writeln!(out, "{}", title(report))?;
        writeln!(out)?;

        writeln!(out, "Balance")?;
        for entry in report.balance.entries() {
            writeln!(
                out,
                "  {:<NAME_WIDTH$} {:>6}",
                player_name(players, &entry.player_id),
                signed(entry.net)
            )?;
        }
        writeln!(out)?;

        writeln!(out, "Transfers (row owes column)")?;
        write!(out, "  {:<NAME_WIDTH$}", "")?;
        for p in players {
            write!(out, " {:>NAME_WIDTH$}", p.name)?;
        }
        writeln!(out)?;
        for from in players {
            write!(out, "  {:<NAME_WIDTH$}", from.name)?;
            for to in players {
                let cell = report
                    .matrix
                    .owes(&from.id, &to.id)
                    .map_or_else(|| "-".to_string(), signed);
                write!(out, " {cell:>NAME_WIDTH$}")?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "  {:<NAME_WIDTH$} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>5} {:>5} {:>6}",
            "Totals", "Au", "Ag", "Cu", "Fe", "Dia", "Bir", "Eag", "Alb", "Miss", "Putt", "ToPar"
        )?;
        for p in players {
            let Some(t) = report.totals_for(p) else {
                continue;
            };
            writeln!(
                out,
                "  {:<NAME_WIDTH$} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>5} {:>5} {:>6}",
                p.name,
                t.outcomes.gold,
                t.outcomes.silver,
                t.outcomes.bronze,
                t.outcomes.iron,
                t.outcomes.diamond,
                t.special.birdie,
                t.special.eagle,
                t.special.albatross,
                t.miss_total,
                t.putt_total,
                signed(t.score_to_par)
            )?;
        }
        writeln!(out)?;

        writeln!(out, "Out")?;
        for b in &report.block_outs {
            let holder = b
                .player_id
                .as_ref()
                .map_or("-", |id| player_name(players, id));
            writeln!(out, "  holes {:<6} {holder}", block_label(b.block))?;
        }
        Ok(())
    }
}

pub(crate) fn title(report: &RoundSettlement) -> String {
    let mut title = format!("Round {}", report.round_id);
    if let Some(place) = &report.place {
        title.push_str(&format!(" - {place}"));
    }
    if let Some(date) = report.play_date {
        title.push_str(&format!(" ({})", date.format("%Y-%m-%d")));
    }
    title
}
