//! XPath lookups with visibility checks.

use std::time::Duration;

use cupfinals_protocols::{PollOutcome, poll_until};
use serde_json::Value;

use crate::cdp::error::CdpError;

use super::core::PageSession;

impl PageSession {
    /// Build an expression that resolves `xpath` to its first match and
    /// returns `{ text }` when the element is rendered, or `null` when it is
    /// missing or hidden.
    pub(crate) fn visible_text_script(xpath: &str) -> String {
        let literal = Value::String(xpath.to_string()).to_string();
        format!(
            r#"(() => {{
  const el = document.evaluate({literal}, document, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue;
  if (!el) return null;
  const style = window.getComputedStyle(el);
  const rect = el.getBoundingClientRect();
  if (style.visibility === 'hidden' || style.display === 'none' || (rect.width === 0 && rect.height === 0)) return null;
  return {{ text: el.innerText ?? el.textContent ?? '' }};
}})()"#
        )
    }

    /// Read the text of the element at `xpath` if it is currently visible.
    pub async fn query_visible_text(&self, xpath: &str) -> Result<Option<String>, CdpError> {
        let value = self.evaluate(&Self::visible_text_script(xpath)).await?;
        Ok(Self::parse_probe(value))
    }

    /// Poll until the element at `xpath` is visible and return its text.
    pub async fn wait_for_visible_text(
        &self,
        xpath: &str,
        timeout: Duration,
        interval: Duration,
    ) -> Result<String, CdpError> {
        match poll_until(interval, timeout, || self.query_visible_text(xpath)).await? {
            PollOutcome::Ready(text) => Ok(text),
            PollOutcome::TimedOut => Err(CdpError::Timeout(format!(
                "Element '{}' not visible after {:?}",
                xpath, timeout
            ))),
        }
    }

    pub(super) fn parse_probe(value: Value) -> Option<String> {
        match value {
            Value::Object(map) => Some(
                map.get("text")
                    .and_then(|t| t.as_str())
                    .unwrap_or_default()
                    .to_string(),
            ),
            _ => None,
        }
    }
}
