//! Command implementations and rendering.

use crate::client::DaemonClient;
use anyhow::Result;
use mqa_common::answer::AnswerResult;
use owo_colors::OwoColorize;

/// Ask a question and render the answer.
pub async fn ask(client: &DaemonClient, question: &str, json: bool) -> Result<()> {
    let result = client.ask(question).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_answer(&result);
    Ok(())
}

fn print_answer(result: &AnswerResult) {
    let confidence = format!("{:.2}", result.confidence);
    let confidence = if result.confidence >= 0.8 {
        confidence.green().to_string()
    } else if result.confidence >= 0.5 {
        confidence.yellow().to_string()
    } else {
        confidence.red().to_string()
    };

    println!("{} {}", "Answer:".bold(), result.answer);
    println!("{} {confidence}", "Confidence:".bold());

    if !result.evidence.is_empty() {
        println!("{}", "Evidence:".bold());
        for e in &result.evidence {
            let id = e.message_id.as_deref().unwrap_or("-");
            println!("  [{}] {}", id.dimmed(), e.snippet);
        }
    }
}

/// Show daemon health.
pub async fn status(client: &DaemonClient) -> Result<()> {
    let health = client.health().await?;
    println!(
        "{} {} (v{}, up {}s)",
        "Daemon:".bold(),
        health.status.green(),
        health.version,
        health.uptime_seconds
    );
    Ok(())
}

/// Invalidate the daemon's message cache.
pub async fn refresh(client: &DaemonClient) -> Result<()> {
    let response = client.refresh().await?;
    println!("Cache {}", response.status.green());
    Ok(())
}

/// Substring search over the corpus.
pub async fn search(client: &DaemonClient, q: &str) -> Result<()> {
    let response = client.search(q).await?;
    println!(
        "{} messages match {:?}",
        response.count.to_string().bold(),
        response.query
    );
    for hit in &response.examples {
        println!("  [{}] {}: {}", hit.id.dimmed(), hit.member.bold(), hit.snippet);
    }
    Ok(())
}

/// Distinct member names in the corpus.
pub async fn names(client: &DaemonClient) -> Result<()> {
    let response = client.names().await?;
    println!("{} distinct members", response.count.to_string().bold());
    for name in &response.names {
        println!("  {name}");
    }
    Ok(())
}

/// Search one member's messages.
pub async fn find(client: &DaemonClient, member: &str, q: &str) -> Result<()> {
    let response = client.find(member, q).await?;
    println!(
        "{} messages from {} match {:?}",
        response.count.to_string().bold(),
        response.member.bold(),
        response.query
    );
    for hit in &response.examples {
        println!("  [{}] {}", hit.id.dimmed(), hit.snippet);
    }
    Ok(())
}

/// Render corpus statistics.
pub async fn analyze(client: &DaemonClient, json: bool) -> Result<()> {
    let stats = client.stats().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{} {}", "Total messages:".bold(), stats.total_messages);
    println!(
        "Missing fields: id={} member_name={} text={} timestamp={}",
        stats.missing_id, stats.missing_member_name, stats.missing_text, stats.missing_timestamp
    );
    println!("Non-RFC3339 timestamps: {}", stats.bad_timestamps);
    println!("Messages mentioning a number > 10: {}", stats.large_number_mentions);

    if !stats.top_members.is_empty() {
        println!("{}", "Top members:".bold());
        for m in &stats.top_members {
            println!("  {} ({} messages)", m.member, m.messages);
        }
    }

    if !stats.date_conflicts.is_empty() {
        println!("{}", "Potential date conflicts:".yellow().bold());
        for c in &stats.date_conflicts {
            println!("  {} ({} distinct dates)", c.member, c.distinct_dates);
        }
    }

    Ok(())
}
