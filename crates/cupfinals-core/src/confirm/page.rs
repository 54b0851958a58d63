//! Confirmation page markup and title sentinel parsing.

use cupfinals_protocols::{FinalResult, UserChoice};
use tracing::warn;

/// Title prefix set by the page once an action is clicked.
pub const CHOICE_PREFIX: &str = "CHOICE_";

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Self-contained confirmation page for one record.
pub fn render_page(result: &FinalResult) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>User Confirmation</title>
<style>
  body {{ font-family: sans-serif; margin: 2em; }}
  table {{ border-collapse: collapse; margin-bottom: 1.5em; }}
  th, td {{ text-align: left; padding: 0.3em 1em; border-bottom: 1px solid #ddd; }}
  button {{ font-size: 1em; padding: 0.5em 1.2em; margin-right: 0.8em; cursor: pointer; }}
  #choiceMessage {{ font-weight: bold; color: #2a6; }}
</style>
<script>
  function handleChoice(choice) {{
    document.title = '{prefix}' + choice;
    document.getElementById('buttons').style.display = 'none';
    document.getElementById('choiceMessage').innerText =
      'You selected: ' + choice.toUpperCase() + '. You can return to the terminal.';
  }}
</script>
</head>
<body>
<h1>Append this World Cup final?</h1>
<table>
  <tr><th>Year</th><td>{year}</td></tr>
  <tr><th>Winner</th><td>{winner}</td></tr>
  <tr><th>Score</th><td>{score}</td></tr>
  <tr><th>Runner-Up</th><td>{runner_up}</td></tr>
</table>
<div id="buttons">
  <button onclick="handleChoice('append')">Yes, append to sheet</button>
  <button onclick="handleChoice('skip')">No, skip this result</button>
  <button onclick="handleChoice('quit')">Quit</button>
</div>
<p id="choiceMessage"></p>
</body>
</html>
"#,
        prefix = CHOICE_PREFIX,
        year = result.year(),
        winner = escape_html(result.winner()),
        score = escape_html(result.score()),
        runner_up = escape_html(result.runner_up()),
    )
}

/// Choice encoded in a page title, or `None` while no action has been taken.
///
/// Unknown actions count as skip.
pub fn parse_sentinel(title: &str) -> Option<UserChoice> {
    let action = title.strip_prefix(CHOICE_PREFIX)?.to_lowercase();
    let choice = match action.as_str() {
        "append" => UserChoice::Append,
        "skip" => UserChoice::Skip,
        "quit" => UserChoice::Quit,
        other => {
            warn!("Unrecognized choice '{}' on confirmation page; skipping", other);
            UserChoice::Skip
        }
    };
    Some(choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FinalResult {
        FinalResult::new(2022, "Argentina", "3–3\n(a.e.t.)", "France")
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"A" & 'B'</b>"#),
            "&lt;b&gt;&quot;A&quot; &amp; &#39;B&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Côte d’Ivoire"), "Côte d’Ivoire");
    }

    #[test]
    fn test_render_contains_fields_and_actions() {
        let html = render_page(&sample());
        assert!(html.contains("<td>2022</td>"));
        assert!(html.contains("<td>Argentina</td>"));
        assert!(html.contains("<td>France</td>"));
        for action in ["append", "skip", "quit"] {
            assert!(html.contains(&format!("handleChoice('{action}')")));
        }
        assert!(html.contains("document.title = 'CHOICE_' + choice"));
        assert!(html.contains("<title>User Confirmation</title>"));
    }

    #[test]
    fn test_render_escapes_values() {
        let result = FinalResult::new(1950, "<script>alert(1)</script>", "2–1", "Brazil & co");
        let html = render_page(&result);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Brazil &amp; co"));
    }

    #[test]
    fn test_parse_sentinel_known_actions() {
        assert_eq!(parse_sentinel("CHOICE_append"), Some(UserChoice::Append));
        assert_eq!(parse_sentinel("CHOICE_skip"), Some(UserChoice::Skip));
        assert_eq!(parse_sentinel("CHOICE_quit"), Some(UserChoice::Quit));
        assert_eq!(parse_sentinel("CHOICE_QUIT"), Some(UserChoice::Quit));
    }

    #[test]
    fn test_parse_sentinel_unknown_action_skips() {
        assert_eq!(parse_sentinel("CHOICE_maybe"), Some(UserChoice::Skip));
        assert_eq!(parse_sentinel("CHOICE_"), Some(UserChoice::Skip));
    }

    #[test]
    fn test_parse_sentinel_pending() {
        assert_eq!(parse_sentinel("User Confirmation"), None);
        assert_eq!(parse_sentinel("choice_append"), None);
    }
}
