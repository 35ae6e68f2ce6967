// crates/maybe-io/src/cli/demo.rs
// `maybe demo`: prints what each combinator does on present/absent and ok/err values

use std::io::Write;

use maybe_core::{Maybe, Outcome};

pub fn run_demo(out: &mut impl Write) -> std::io::Result<()> {
    // unwrap: absent falls back to the type's default
    let value = Maybe::some("Test one".to_string());
    let none: Maybe<String> = Maybe::none();
    writeln!(out, "Unwrapped Value: {}", value.unwrap())?;
    writeln!(out, "Unwrapped None: {}", none.unwrap())?;

    // unwrap_or: fallback only runs when absent
    let value = Maybe::some("Test two");
    let none: Maybe<&str> = Maybe::none();
    writeln!(out, "Unwrap_or Value: {}", value.unwrap_or(|| "Default Value"))?;
    writeln!(out, "Unwrap_or None: {}", none.unwrap_or(|| "Default Value"))?;

    let describe = |m: Maybe<&str>| m.match_with(|v| format!("Matched Value: {v}"), || "None".to_string());
    writeln!(out, "Matched Result with Value: {}", describe(Maybe::some("Test three")))?;
    writeln!(out, "Matched Result with None: {}", describe(Maybe::none()))?;

    // Defaults are values too
    writeln!(out, "Some(false) is present: {}", Maybe::some(false).is_some())?;
    writeln!(out, "Coalesced 0 is present: {}", Maybe::coalesce(0).is_some())?;

    let nested = Maybe::some(Maybe::some(Maybe::some(true)));
    writeln!(out, "Nested unwrap: {}", nested.unwrap().unwrap().unwrap())?;

    let parsed: Outcome<i32, String> = "42".parse::<i32>().map_err(|e| e.to_string()).into();
    let failed: Outcome<i32, String> = "forty-two".parse::<i32>().map_err(|e| e.to_string()).into();
    writeln!(out, "Outcome Ok unwrap: {}", parsed.clone().unwrap())?;
    writeln!(out, "Outcome Err unwrap: {}", failed.clone().unwrap())?;
    writeln!(out, "Outcome Err unwrap_or: {}", failed.clone().unwrap_or(-1))?;
    writeln!(
        out,
        "Outcome Err match: {}",
        failed.match_with(|v| v.to_string(), |e| format!("error: {e}"))
    )?;
    writeln!(out, "Outcome Ok unwrap_or_panic: {}", parsed.unwrap_or_panic())?;

    Ok(())
}

/// Escalate an absent value, which exits the process
pub fn end_absent() {
    let missing: Maybe<String> = Maybe::none();
    let _ = missing.unwrap_or_panic();
}
