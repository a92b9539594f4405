use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use milestone_core::model::{AgeBand, Category};
use services::{MilestoneError, MilestoneService, MilestoneTracker};

use crate::args::{AnswerArgs, QuestionsArgs, WalkArgs};

pub async fn status(svc: &MilestoneService, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let (tracker, _) = svc.load().await?;
    let report = tracker.progress();
    let completed: Vec<u8> = tracker.completed_bands().map(|b| b.value()).collect();

    if json {
        let value = serde_json::json!({
            "overall": report.overall_percentage(),
            "categories": report.categories(),
            "bands": report.bands(),
            "completed_bands": completed,
            "ignored": report.ignored(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    writeln!(out, "Overall: {}%", report.overall_percentage())?;
    let width = Category::ALL
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(0);
    for entry in report.categories() {
        writeln!(
            out,
            "  {:<width$} {:>3}/{:<3} {:>3}%",
            entry.category.label(),
            entry.yes,
            entry.total,
            entry.percentage
        )?;
    }
    if completed.is_empty() {
        writeln!(out, "Completed leaps: none")?;
    } else {
        let list: Vec<String> = completed.iter().map(u8::to_string).collect();
        writeln!(out, "Completed leaps: {}", list.join(", "))?;
    }
    if report.ignored() > 0 {
        writeln!(out, "({} cached answers no longer match a question)", report.ignored())?;
    }
    Ok(())
}

pub async fn questions(
    svc: &MilestoneService,
    args: &QuestionsArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let (tracker, _) = svc.load().await?;
    let catalogue = svc.catalogue();
    let categories: Vec<Category> = match args.category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    writeln!(
        out,
        "{} (around week {})",
        args.band.label(),
        args.band.onset_weeks()
    )?;
    for category in categories {
        writeln!(out, "{}", category.label())?;
        for (index, question) in catalogue.questions(args.band, category)?.iter().enumerate() {
            let mark = match tracker.get_response(args.band, category, question) {
                Some(true) => "yes",
                Some(false) => "no",
                None => "-",
            };
            writeln!(out, "  [{index}] {question}  {mark}")?;
        }
    }
    Ok(())
}

pub async fn answer(
    svc: &MilestoneService,
    args: &AnswerArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let (mut tracker, _) = svc.load().await?;
    let category = args.category.unwrap_or_else(Category::first);
    move_to(&mut tracker, args.band, category)?;
    if !tracker.select_question(args.index) {
        bail!(
            "{} {} has no question {}",
            args.band.label(),
            category.label(),
            args.index
        );
    }

    let outcome = svc.answer(&mut tracker, args.reply.as_bool()).await?;
    writeln!(
        out,
        "{}: {}",
        outcome.record.question(),
        if outcome.record.answer() { "yes" } else { "no" }
    )?;
    if outcome.band_completed {
        writeln!(out, "{} complete", args.band.label())?;
    }
    writeln!(out, "Overall: {}%", tracker.overall_percentage())?;
    Ok(())
}

/// Prompt for each remaining question of a band until it completes, the
/// input ends, or the user types `q`.
pub async fn walk(
    svc: &MilestoneService,
    args: &WalkArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let (mut tracker, _) = svc.load().await?;
    move_to(&mut tracker, args.band, args.category.unwrap_or_else(Category::first))?;

    let mut line = String::new();
    while let Some(question) = tracker.current_question().map(str::to_owned) {
        let position = tracker.position();
        let category = position.category().unwrap_or_else(Category::first);
        let previous = match tracker.get_response(args.band, category, &question) {
            Some(true) => " (was yes)",
            Some(false) => " (was no)",
            None => "",
        };
        write!(out, "[{}] {question}{previous} y/n/q: ", category.label())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("reading answer")? == 0 {
            writeln!(out)?;
            break;
        }
        let yes = match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            "q" | "quit" => break,
            other => {
                writeln!(out, "expected y, n or q, got {other:?}")?;
                continue;
            }
        };

        match svc.answer(&mut tracker, yes).await {
            Ok(outcome) => {
                if outcome.band_completed {
                    writeln!(out, "{} complete", args.band.label())?;
                }
            }
            Err(err @ MilestoneError::Persist { .. }) => {
                // Keep walking; the answer stays in this session's progress.
                writeln!(out, "not saved: {err}")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(out, "Overall: {}%", tracker.overall_percentage())?;
    Ok(())
}

pub async fn clear(svc: &MilestoneService, out: &mut impl Write) -> anyhow::Result<()> {
    svc.clear_all().await?;
    writeln!(out, "Cleared all answers")?;
    Ok(())
}

fn move_to(tracker: &mut MilestoneTracker, band: AgeBand, category: Category) -> anyhow::Result<()> {
    if !tracker.select_age_band(band.value()) {
        bail!("{} is not in the catalogue", band.label());
    }
    tracker.select_category(category);
    Ok(())
}
