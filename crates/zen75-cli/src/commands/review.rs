//! The enforcement-gated evening review.
//!
//! A strictly linear wizard: daily coherence check, state coherence gate,
//! causality chain, edge score, conditional backward debug, insight, and
//! tomorrow's intention. Any failed gate abandons the entry; nothing is
//! written until every gate has passed.

use chrono::Local;
use zen75_core::checklist::CHECKLIST_ITEMS;
use zen75_core::gates::{
    self, CausalityChain, DebugTrace, GateOutcome, Insight, LanguageIssue,
    BACKWARD_DEBUG_THRESHOLD, STATE_COHERENCE_THRESHOLD,
};
use zen75_core::{DayStore, StreakTracker};

use crate::{prompt, ui};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = DayStore::open()?;
    let today = Local::now().date_naive();
    let mut record = store.load(today)?;

    let completed: Vec<String> = CHECKLIST_ITEMS
        .iter()
        .zip(&record.checklist)
        .filter(|(_, checked)| **checked)
        .map(|(item, _)| item.label.to_string())
        .collect();

    if gates::daily_coherence_applies(record.focus.as_deref(), &completed) {
        let intention = record.focus.as_deref().unwrap_or("");
        if !daily_coherence_gate(intention, &completed)? {
            println!(
                "{}",
                ui::yellow("Entry not recorded. Reset state, then try again.")
            );
            return Ok(());
        }
    }

    let Some(clarity) = state_coherence_gate()? else {
        return Ok(());
    };

    let intention = record
        .focus
        .clone()
        .unwrap_or_else(|| "(no intention set)".to_string());
    let Some(chain) = causality_chain_gate(&intention)? else {
        return Ok(());
    };

    let Some(edge) = prompt::read_rating("Edge score (1-10)", "edge")? else {
        println!("{}", ui::yellow("Entry abandoned."));
        return Ok(());
    };

    let debug_trace = if gates::needs_backward_debug(edge) {
        Some(backward_debug_gate(edge)?)
    } else {
        None
    };

    let insight = insight_prompt()?;
    let tomorrow = prompt::read_line("Tomorrow")?;

    if record.state.is_none() {
        record.state = Some(clarity);
    }
    record.chain = Some(chain);
    record.edge = Some(edge);
    record.debug_trace = debug_trace;
    record.insight = insight;
    record.tomorrow = (!tomorrow.is_empty()).then_some(tomorrow);
    store.save(&record)?;

    let streak = StreakTracker::open()?.update(record.all_complete())?;
    println!("\n{} Entry recorded", ui::green("\u{2713}"));
    println!(
        "\u{1f525} Current streak: {} days (best {})",
        streak.current, streak.best
    );
    Ok(())
}

/// Gate 4: verify inner state still matches the recorded actions.
///
/// Returns false when the user reports incoherence and declines to reset.
fn daily_coherence_gate(
    intention: &str,
    completed: &[String],
) -> Result<bool, Box<dyn std::error::Error>> {
    ui::print_gate_banner("GATE 4: DAILY COHERENCE CHECK (10 sec)");

    println!("{} {intention}", ui::blue("Intention:"));
    println!("{} {}\n", ui::blue("Completed:"), completed.join(", "));

    println!(
        "{}",
        ui::yellow("Is your inner state consistent with today's actions?")
    );
    if prompt::confirm("(y/n)", true)? {
        ui::print_rule(ui::GREEN);
        println!("{}", ui::green("\u{2713} COHERENCE MAINTAINED"));
        ui::print_rule(ui::GREEN);
        return Ok(true);
    }

    ui::print_rule(ui::RED);
    println!("{}", ui::red("\u{26a0} INCOHERENCE DETECTED"));
    ui::print_rule(ui::RED);
    println!("\nResults are downstream of inner state.");
    println!("\n{}\n", ui::yellow("Stop. Reset state. Then act."));

    if prompt::confirm("Reset state now? (y/n)", false)? {
        print_reset_menu();
        prompt::wait_for_enter("\nPress Enter when state is reset...")?;
        return Ok(true);
    }
    Ok(false)
}

/// Gate 1: state clarity must reach the threshold before anything is
/// recorded. Returns the validated rating, or None when the entry is
/// abandoned or locked.
fn state_coherence_gate() -> Result<Option<u8>, Box<dyn std::error::Error>> {
    ui::print_gate_banner("GATE 1: STATE COHERENCE CHECK");

    println!("{}", ui::yellow("Action from noise compounds noise."));
    println!(
        "{}\n",
        ui::yellow("Control the state, the rest follows mechanically.")
    );

    println!("Rate your inner state clarity (1-10):");
    println!("  1-4 = Conflicted, scattered, reactive");
    println!("  5-7 = Mostly clear, some noise");
    println!("  8-10 = Coherent, calm, intentional\n");

    let Some(clarity) = prompt::read_rating("State clarity", "state clarity")? else {
        println!("{}", ui::red("No valid score. Entry abandoned."));
        return Ok(None);
    };

    match gates::check_state_coherence(clarity) {
        GateOutcome::Passed => {
            ui::print_rule(ui::GREEN);
            println!(
                "{} (coherence: {clarity}/10)",
                ui::green("\u{2713} GATE PASSED")
            );
            ui::print_rule(ui::GREEN);
            println!();
            Ok(Some(clarity))
        }
        GateOutcome::Locked => {
            ui::print_rule(ui::RED);
            println!("{}", ui::red("\u{26a0}  GATE LOCKED \u{26a0}"));
            ui::print_rule(ui::RED);
            println!("\nCoherence: {clarity}/10 (minimum: {STATE_COHERENCE_THRESHOLD})");
            println!("\n{}", ui::yellow("Reset state first:"));
            print_reset_menu();
            prompt::wait_for_enter("\nPress Enter when ready...")?;
            Ok(None)
        }
    }
}

/// Gate 2: each layer must trace to the previous one. Returns None when
/// the chain breaks.
fn causality_chain_gate(
    intention: &str,
) -> Result<Option<CausalityChain>, Box<dyn std::error::Error>> {
    ui::print_gate_banner("GATE 2: CAUSALITY CHAIN");

    println!(
        "{}",
        ui::yellow("Each layer must reference the previous one.")
    );
    println!("{}\n", ui::yellow("Unanchored language will be rejected."));

    println!("{}", ui::blue("\u{25ba} LAYER 1: INNER STATE (Intention)"));
    println!("  \"{intention}\"\n");
    let Some(attention) =
        concrete_answer("What did you focus on? (must relate to intention)")?
    else {
        println!("\n{}", ui::red("\u{2717} Chain broken at attention layer"));
        return Ok(None);
    };

    println!("\n{}", ui::blue("\u{25ba} LAYER 2: ATTENTION"));
    println!("  \"{attention}\"\n");
    let Some(action) =
        concrete_answer("What specific actions did you take? (must trace to focus)")?
    else {
        println!("\n{}", ui::red("\u{2717} Chain broken at action layer"));
        return Ok(None);
    };

    println!("\n{}", ui::blue("\u{25ba} LAYER 3: ACTION"));
    println!("  \"{action}\"\n");
    let Some(result) =
        concrete_answer("What concrete result emerged? (must trace to actions)")?
    else {
        println!("\n{}", ui::red("\u{2717} Chain broken at result layer"));
        return Ok(None);
    };

    ui::print_rule(ui::YELLOW);
    println!("{}", ui::yellow("TRACEABILITY CHECK"));
    ui::print_rule(ui::YELLOW);
    println!("\n  Intention \u{2192} Attention \u{2192} Action \u{2192} Result\n");

    if !prompt::confirm("Can you trace each layer to the previous? (y/n)", true)? {
        ui::print_rule(ui::RED);
        println!("{}", ui::red("\u{2717} GATE FAILED - Unanchored language"));
        ui::print_rule(ui::RED);
        println!("\nWords must be concretely traceable to state and action.");
        println!("Try again with specific details.\n");
        return Ok(None);
    }

    ui::print_rule(ui::GREEN);
    println!("{}", ui::green("\u{2713} GATE PASSED - Chain is anchored"));
    ui::print_rule(ui::GREEN);
    println!();

    Ok(Some(CausalityChain {
        attention,
        action,
        result,
    }))
}

/// Gate 3: debug backward from the bad result to the root-cause state.
fn backward_debug_gate(edge: u8) -> Result<DebugTrace, Box<dyn std::error::Error>> {
    ui::print_gate_banner("GATE 3: BACKWARD DEBUG");

    println!(
        "{}",
        ui::red(&format!("Edge score {edge}/10 triggered debugging"))
    );
    println!("(threshold: {BACKWARD_DEBUG_THRESHOLD})");
    println!(
        "\n{}\n",
        ui::yellow(
            "Debug direction: Result \u{2192} Action \u{2192} Words \u{2192} Attention \u{2192} State"
        )
    );

    println!("{}", ui::bold("5. BAD RESULT"));
    let bad_result = prompt::read_line("What was the outcome?")?;

    println!("\n{}", ui::bold("4. WRONG ACTION"));
    let wrong_action = prompt::read_line("What did you actually do?")?;

    println!("\n{}", ui::bold("3. WRONG WORDS/THOUGHTS"));
    let wrong_words = prompt::read_line("What were you telling yourself?")?;

    println!("\n{}", ui::bold("2. WRONG ATTENTION"));
    let wrong_attention = prompt::read_line("Where was your focus?")?;

    println!("\n{}", ui::bold("1. ROOT CAUSE (INNER STATE)"));
    let root_cause_state = prompt::read_line("What was happening internally?")?;

    ui::print_rule(ui::YELLOW);
    println!("{}", ui::yellow("ROOT CAUSE IDENTIFIED"));
    ui::print_rule(ui::YELLOW);
    println!("\n{} {root_cause_state}", ui::red("Inner state:"));
    println!(
        "\n{}\n",
        ui::green("Fix the state, the rest follows mechanically.")
    );

    Ok(DebugTrace {
        bad_result,
        wrong_action,
        wrong_words,
        wrong_attention,
        root_cause_state,
    })
}

/// Optional tiny change, confirmed concrete with one revision re-ask.
fn insight_prompt() -> Result<Option<Insight>, Box<dyn std::error::Error>> {
    let tiny_change = prompt::read_line("Tiny change for tomorrow (optional)")?;
    if tiny_change.is_empty() {
        return Ok(None);
    }

    println!("\n{}", ui::yellow("Concreteness check:"));
    println!("  \"{tiny_change}\"");
    if prompt::confirm("\nIs this change concrete and actionable? (y/n)", true)? {
        return Ok(Some(Insight { tiny_change }));
    }

    println!(
        "\n{}",
        ui::yellow("Make it specific and traceable to action.")
    );
    let revised = prompt::read_line("Revised tiny change")?;
    Ok((!revised.is_empty()).then_some(Insight {
        tiny_change: revised,
    }))
}

/// A free-text answer that must pass the concrete-language check; one
/// re-ask on rejection, then the chain breaks.
fn concrete_answer(question: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
    for attempt in 0..2 {
        let answer = prompt::read_line(question)?;
        if answer.is_empty() {
            return Ok(None);
        }
        match gates::validate_concrete_language(&answer) {
            Ok(()) => return Ok(Some(answer)),
            Err(issue) if attempt == 0 => {
                match issue {
                    LanguageIssue::Vague(phrase) => {
                        println!(
                            "\n{}",
                            ui::red(&format!("\u{2717} Vague language detected: \"{phrase}\""))
                        );
                    }
                    LanguageIssue::TooShort => {
                        println!("\n{}", ui::red("\u{2717} Too vague. Add more detail."));
                    }
                }
                println!("Be specific. What exactly did you do?");
            }
            Err(_) => return Ok(None),
        }
    }
    Ok(None)
}

fn print_reset_menu() {
    println!("  \u{2022} Walk (5-10 min)");
    println!("  \u{2022} Breathe deeply (2 min)");
    println!("  \u{2022} Write state on paper (3 min)");
    println!("  \u{2022} Close eyes, sit still (5 min)");
}
