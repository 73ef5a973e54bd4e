// Terminal rendering for scan reports and search results.
//
// Every similarity or ratio is shown with its scale ("x / 1.00") so nobody
// mistakes a 0.3 cosine for 30%. Renderers build a String; callers decide
// where it goes.

use std::fmt::Write;

use colored::Colorize;

use super::{fmt_percent, fmt_ratio};
use crate::scan::ScanReport;
use crate::vector::similarity::Snippet;

/// How many frequency terms the human report lists.
const HUMAN_TOP_TERMS: usize = 12;

/// Render the full scan report for the terminal.
pub fn render_scan_report(report: &ScanReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_scan_report(&mut out, report);
    out
}

fn write_scan_report(out: &mut String, r: &ScanReport) -> std::fmt::Result {
    writeln!(
        out,
        "\n{}\n",
        "=== Retreat Notes Report (Human Readable, No LLM) ===".bold()
    )?;

    let s = &r.stats;
    writeln!(
        out,
        "Text stats: {} lines, {} paragraphs, {} tokens (after stopword filtering).",
        s.lines, s.paragraphs, s.tokens
    )?;

    let emo = &r.emotion;
    writeln!(out, "\n{}", "Emotion signal (lexicon-based, weak heuristic):".bold())?;
    writeln!(
        out,
        "  Total emotion word hits: {}  {}",
        emo.total_hits,
        "(if 0, the lexicon didn't match your wording)".dimmed()
    )?;
    writeln!(out, "  Top emotion: {}", emo.top)?;
    writeln!(out, "  Distribution (fraction of emotion hits):")?;
    for (category, frac) in emo.ranked_dist() {
        writeln!(
            out,
            "    - {:<10}: {}  ({})",
            category.as_str(),
            fmt_percent(frac),
            fmt_ratio(frac).dimmed()
        )?;
    }

    writeln!(
        out,
        "\n{}",
        "Top keywords (TF-IDF terms/phrases, not a score):".bold()
    )?;
    writeln!(out, "  {}", r.top_keywords.join(", "))?;

    writeln!(
        out,
        "\n{}",
        "Top terms by frequency (counts, unit = occurrences):".bold()
    )?;
    for item in r.top_terms.iter().take(HUMAN_TOP_TERMS) {
        writeln!(out, "  - {}: {}", item.term, item.count)?;
    }

    writeln!(
        out,
        "\n{}",
        "Theme similarity (cosine similarity on TF-IDF; unitless, max = 1.00):".bold()
    )?;
    for theme in &r.theme_similarity {
        writeln!(out, "  - {:<21}: {}", theme.name, fmt_ratio(theme.score))?;
    }

    writeln!(
        out,
        "\n{}",
        "Paragraph emotion sample (first up to 12 paragraphs):".bold()
    )?;
    for p in &r.paragraph_emotions_sample {
        writeln!(
            out,
            "\n  Paragraph {} - top emotion: {} (hits={})",
            p.para, p.top_emotion, p.total_hits
        )?;
        if p.total_hits == 0 {
            writeln!(
                out,
                "    {}",
                "No lexicon hits in this paragraph (try expanding the lexicon).".dimmed()
            )?;
        } else {
            let mut dist = p.dist.entries().to_vec();
            dist.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            for (category, frac) in dist.into_iter().take(2) {
                writeln!(
                    out,
                    "    {}: {} ({})",
                    category,
                    fmt_percent(frac),
                    fmt_ratio(frac).dimmed()
                )?;
            }
        }
        writeln!(out, "    Preview: {}", p.preview)?;
    }

    writeln!(
        out,
        "\n{}",
        "Representative snippets (cosine similarity; unitless, max = 1.00):".bold()
    )?;
    for (name, snippets) in &r.snippets_by_query {
        writeln!(out, "\n  {}:", name)?;
        if snippets.is_empty() {
            writeln!(out, "    {}", "(no matches)".dimmed())?;
            continue;
        }
        for snippet in snippets {
            writeln!(out, "    - [{}] {}", fmt_ratio(snippet.score), snippet.text)?;
        }
    }

    Ok(())
}

/// Render one search result block for the terminal.
pub fn render_search(query: &str, snippets: &[Snippet]) -> String {
    let mut out = String::new();
    let _ = write_search(&mut out, query, snippets);
    out
}

fn write_search(out: &mut String, query: &str, snippets: &[Snippet]) -> std::fmt::Result {
    writeln!(out, "\n{}", "=== Search Results ===".bold())?;
    writeln!(
        out,
        "{}\n",
        "Score meaning: cosine similarity on TF-IDF (unitless), shown as score / 1.00".dimmed()
    )?;
    writeln!(out, "Query: {}\n", query)?;

    if snippets.is_empty() {
        writeln!(
            out,
            "(No matching lines. Try different words or add more notes.)\n"
        )?;
        return Ok(());
    }

    for snippet in snippets {
        writeln!(out, "- [{}] {}", fmt_ratio(snippet.score), snippet.text)?;
    }
    writeln!(out)?;
    Ok(())
}
