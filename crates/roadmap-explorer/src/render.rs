//! Terminal renderer
//!
//! Draws view models as plain text, or dumps them as JSON for other front ends.

use crate::config::ExplorerConfig;
use roadmap_core::{LevelSection, RoadmapView, Section, NO_RESULTS_MESSAGE};
use serde::Serialize;
use std::io::{self, Write};

const RULE: &str = "---";

/// Page header: title and tagline
pub(crate) fn page_header<W: Write>(out: &mut W, config: &ExplorerConfig) -> io::Result<()> {
    writeln!(out, "{}", config.page_title)?;
    writeln!(out, "{}", config.tagline)?;
    writeln!(out)
}

/// Every card, or the no-results notice
pub(crate) fn cards<W: Write>(out: &mut W, views: &[RoadmapView<'_>]) -> io::Result<()> {
    if views.is_empty() {
        return writeln!(out, "{NO_RESULTS_MESSAGE}");
    }

    for view in views {
        card(out, view)?;
        writeln!(out, "{RULE}")?;
    }
    Ok(())
}

/// One card, section by section
pub(crate) fn card<W: Write>(out: &mut W, view: &RoadmapView<'_>) -> io::Result<()> {
    for section in view.sections() {
        match section {
            Section::Header(header) => {
                writeln!(out, "== {} [{}]", header.title, header.difficulty)?;
                writeln!(out, "   image: {}", header.image)?;
                writeln!(out, "   {}", header.description)?;
            }
            Section::Level(level) => level_section(out, level)?,
            Section::Tools(tools) => {
                writeln!(out)?;
                let tags: Vec<String> = tools.iter().map(|t| format!("[{t}]")).collect();
                writeln!(out, "  Tools: {}", tags.join(" "))?;
            }
            Section::Resources(links) => {
                writeln!(out)?;
                writeln!(out, "  Resources:")?;
                for link in links {
                    writeln!(out, "    - [{}]({})", link.text, link.href)?;
                }
            }
        }
    }
    Ok(())
}

fn level_section<W: Write>(out: &mut W, section: &LevelSection<'_>) -> io::Result<()> {
    writeln!(out)?;
    if section.collapsed {
        // Collapsed sections show only their heading
        let noun = if section.topics.len() == 1 { "topic" } else { "topics" };
        return writeln!(out, "  [+] {} ({} {noun})", section.heading, section.topics.len());
    }

    writeln!(out, "  {}", section.heading)?;
    for topic in &section.topics {
        writeln!(out, "    {}", topic.topic)?;
        writeln!(out, "      Concepts: {}", topic.concepts_joined)?;
    }
    Ok(())
}

/// Pretty JSON for any serializable payload, newline terminated
pub(crate) fn json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roadmap_core::{to_view_model, ViewOptions};
    use roadmap_test_utils::{backend_systems, frontend_basics};

    fn render(views: &[RoadmapView<'_>]) -> String {
        let mut out = Vec::new();
        cards(&mut out, views).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_no_results_notice() {
        assert_eq!(render(&[]), "No roadmaps match your filters.\n");
    }

    #[test]
    fn renders_full_card() {
        let roadmap = frontend_basics();
        let text = render(&[to_view_model(&roadmap, ViewOptions::default())]);

        let expected = "\
== Frontend Basics [beginner]
   image: https://img.example/frontend.png
   Build pages with HTML, CSS and JavaScript

  Beginner Level
    HTML Structure
      Concepts: Tags, Semantics
    CSS Styling
      Concepts: Selectors, Box Model

  Intermediate Level
    Responsive Layout
      Concepts: Flexbox, Grid

  Tools: [VS Code] [Chrome DevTools]

  Resources:
    - [https://developer.mozilla.org](https://developer.mozilla.org)
---
";
        assert_eq!(text, expected);
    }

    #[test]
    fn collapsed_levels_hide_topics() {
        let roadmap = backend_systems();
        let options = ViewOptions::default()
            .with_collapse_levels(true)
            .with_show_tools(false);
        let text = render(&[to_view_model(&roadmap, options)]);

        assert!(text.contains("  [+] Advanced Level (1 topic)\n"));
        assert!(text.contains("  [+] Expert Level (1 topic)\n"));
        assert!(!text.contains("Caching Strategies"));
        assert!(!text.contains("Tools:"));
    }

    #[test]
    fn json_output_is_newline_terminated() {
        let mut out = Vec::new();
        json(&mut out, &["all", "beginner"]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with("]\n"));
        assert_eq!(serde_json::from_str::<Vec<String>>(&text).unwrap(), vec!["all", "beginner"]);
    }

    #[test]
    fn page_header_uses_config() {
        let mut out = Vec::new();
        page_header(&mut out, &ExplorerConfig::default()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Roadmap Explorer\nA modern, animated roadmap viewer.\n\n"
        );
    }
}
