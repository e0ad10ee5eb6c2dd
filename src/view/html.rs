use maud::{Markup, html};

use super::summary::title;
use super::utils::{block_label, player_name, signed};
use crate::controller::RoundSettlement;

fn net_class(value: i64) -> &'static str {
    match value {
        v if v > 0 => "net-plus",
        v if v < 0 => "net-minus",
        _ => "net-even",
    }
}

#[must_use]
pub fn render_balance_table(report: &RoundSettlement) -> Markup {
    html! {
        h3 { "Balance" }
        table class="styled-table" {
            thead { tr { th { "Player" } th { "Net" } } }
            tbody {
                @for entry in report.balance.entries() {
                    tr {
                        td { (player_name(&report.players, &entry.player_id)) }
                        td class=(net_class(entry.net)) { (signed(entry.net)) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_transfer_table(report: &RoundSettlement) -> Markup {
    html! {
        h3 { "Transfers" }
        table class="styled-table" {
            thead {
                tr {
                    th { "Owes →" }
                    @for p in &report.players { th { (p.name) } }
                }
            }
            tbody {
                @for from in &report.players {
                    tr {
                        td { (from.name) }
                        @for to in &report.players {
                            @match report.matrix.owes(&from.id, &to.id) {
                                Some(amount) => td class=(net_class(-amount)) { (signed(amount)) },
                                None => td { "-" },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_totals_table(report: &RoundSettlement) -> Markup {
    html! {
        h3 { "Totals" }
        table class="styled-table" {
            thead {
                tr {
                    th { "Player" }
                    th { "Olympic" }
                    th { "Special" }
                    th { "Snake" }
                    th { "Putts" }
                    th { "To par" }
                }
            }
            tbody {
                @for p in &report.players {
                    @if let Some(t) = report.totals_for(p) {
                        tr {
                            td { (p.name) }
                            td { (t.olympic_points(&report.rates)) }
                            td { (t.special_points()) }
                            td { (t.miss_total) }
                            td { (t.putt_total) }
                            td { (signed(t.score_to_par)) }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_block_outs(report: &RoundSettlement) -> Markup {
    html! {
        h3 { "Out" }
        ul class="block-outs" {
            @for b in &report.block_outs {
                li {
                    "Holes " (block_label(b.block)) ": "
                    @match &b.player_id {
                        Some(id) => strong { (player_name(&report.players, id)) },
                        None => "-",
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_settlement_html(report: &RoundSettlement) -> Markup {
    html! {
        div id="settlement" {
            h2 { (title(report)) }
            (render_balance_table(report))
            (render_transfer_table(report))
            (render_totals_table(report))
            (render_block_outs(report))
        }
    }
}
