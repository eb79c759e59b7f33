use super::Context;
use crate::config::lamports_to_sol;
use crate::error::CliResult;
use chrono::DateTime;
use solana_sdk::pubkey::Pubkey;
use solfund_sdk::CampaignSnapshot;

pub async fn execute(context: &Context, campaign: Pubkey, json: bool) -> CliResult<()> {
    let snapshot = context.client().get_campaign(&campaign).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render(&snapshot));
    }
    Ok(())
}

fn format_time(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

fn render(snapshot: &CampaignSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!("📊 {} [{}]\n", snapshot.name, snapshot.status));
    out.push_str(&format!("Address: {}\n", snapshot.address));
    out.push_str(&format!("Creator: {}\n", snapshot.creator));
    if !snapshot.category.is_empty() {
        out.push_str(&format!("Category: {}\n", snapshot.category));
    }
    if !snapshot.description.is_empty() {
        out.push_str(&format!("{}\n", snapshot.description));
    }

    out.push_str(&format!(
        "\nRaised: {} / {} SOL ({}.{:02}%)\n",
        lamports_to_sol(snapshot.amount_raised),
        lamports_to_sol(snapshot.goal_amount),
        snapshot.progress_bps / 100,
        snapshot.progress_bps % 100
    ));
    out.push_str(&format!(
        "Withdrawn: {} SOL, in escrow: {} SOL\n",
        lamports_to_sol(snapshot.withdrawn_amount),
        lamports_to_sol(snapshot.refundable_pool)
    ));
    out.push_str(&format!(
        "Minimum contribution: {} SOL\n",
        lamports_to_sol(snapshot.min_contribution)
    ));
    out.push_str(&format!(
        "Window: {} to {}\n",
        format_time(snapshot.start_time),
        format_time(snapshot.end_time)
    ));
    out.push_str(&format!(
        "Refunds: {}\n",
        match (snapshot.allows_refund, snapshot.auto_refund_on_failure) {
            (true, _) => "allowed",
            (false, true) => "not allowed (auto-refund on failure)",
            (false, false) => "not allowed",
        }
    ));

    out.push_str(&format!("\nMilestones ({}):\n", snapshot.milestones.len()));
    for (index, milestone) in snapshot.milestones.iter().enumerate() {
        let marker = if milestone.is_completed {
            "✅"
        } else if index == usize::from(snapshot.current_milestone) {
            "➡️ "
        } else {
            "  "
        };
        out.push_str(&format!(
            "  {} {}% {} (unlocks at {} SOL, due {})\n",
            marker,
            milestone.percentage,
            milestone.title,
            lamports_to_sol(milestone.threshold),
            format_time(milestone.expected_completion_time)
        ));
    }

    if !snapshot.updates.is_empty() {
        out.push_str("\nUpdates:\n");
        for update in snapshot.updates.iter().rev() {
            out.push_str(&format!(
                "  [{}] {}: {}\n",
                format_time(update.timestamp),
                update.title,
                update.content
            ));
        }
    }

    out.push_str(&format!("\nFunders: {}\n", snapshot.funders.len()));
    out
}
